//! Resource registry: the fixed set of tables this API exposes.
//!
//! Every resource is one table with an auto-increment `id`, a `nome` column,
//! and one variant-specific second column. The registry replaces per-resource
//! handler copies with one descriptor the generic handlers resolve at runtime.

use std::collections::HashMap;

/// Declared type of the variant-specific column. Integer-kind columns get
/// string form input coerced to a number before binding; text-kind values
/// pass through unchanged and the database enforces the real type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Text,
}

#[derive(Clone, Debug)]
pub struct Resource {
    /// URL path segment, e.g. "usuarios" in `GET /usuarios`.
    pub path_segment: &'static str,
    /// Backing table name. Identifiers never come from request input.
    pub table_name: &'static str,
    /// Name of the second column (`idade` or `rm`).
    pub extra_column: &'static str,
    pub extra_kind: ColumnKind,
}

impl Resource {
    /// Column list in wire order: id, nome, extra.
    pub fn columns(&self) -> [&'static str; 3] {
        ["id", "nome", self.extra_column]
    }
}

#[derive(Clone, Debug)]
pub struct ResourceRegistry {
    by_path: HashMap<&'static str, Resource>,
}

impl ResourceRegistry {
    /// The three built-in variants. `usuarios` and `users` differ only in
    /// table name; `alunos` carries `rm` instead of `idade`.
    pub fn builtin() -> Self {
        let resources = [
            Resource {
                path_segment: "usuarios",
                table_name: "usuario",
                extra_column: "idade",
                extra_kind: ColumnKind::Integer,
            },
            Resource {
                path_segment: "users",
                table_name: "users",
                extra_column: "idade",
                extra_kind: ColumnKind::Integer,
            },
            // rm is a registration code; clients send it as digits or text.
            Resource {
                path_segment: "alunos",
                table_name: "alunos",
                extra_column: "rm",
                extra_kind: ColumnKind::Text,
            },
        ];
        ResourceRegistry {
            by_path: resources.into_iter().map(|r| (r.path_segment, r)).collect(),
        }
    }

    pub fn by_path(&self, path: &str) -> Option<&Resource> {
        self.by_path.get(path)
    }

    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.by_path.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_three_variants() {
        let reg = ResourceRegistry::builtin();
        assert_eq!(reg.resources().count(), 3);
    }

    #[test]
    fn usuarios_maps_to_singular_table() {
        let reg = ResourceRegistry::builtin();
        let r = reg.by_path("usuarios").unwrap();
        assert_eq!(r.table_name, "usuario");
        assert_eq!(r.extra_column, "idade");
        assert_eq!(r.extra_kind, ColumnKind::Integer);
    }

    #[test]
    fn alunos_carries_rm() {
        let reg = ResourceRegistry::builtin();
        let r = reg.by_path("alunos").unwrap();
        assert_eq!(r.table_name, "alunos");
        assert_eq!(r.extra_column, "rm");
        assert_eq!(r.extra_kind, ColumnKind::Text);
        assert_eq!(r.columns(), ["id", "nome", "rm"]);
    }

    #[test]
    fn unknown_segment_is_none() {
        let reg = ResourceRegistry::builtin();
        assert!(reg.by_path("clientes").is_none());
    }
}
