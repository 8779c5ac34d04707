use super::{Description, Layout, LayoutStrategy, StrategyReport, TypeDef, TypeId, TypeKind};
use crate::{Error, Result};
use std::collections::HashMap;

/// Append-only store of every type defined so far
///
/// The registry provides:
/// - Registration of atomic, struct and union types
/// - Name and handle lookup
/// - Layout computation and descriptions for registered types
///
/// Definitions live in an arena indexed by [`TypeId`]. Entries are never
/// removed or redefined, and a failed registration leaves the registry
/// exactly as it was.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: Vec<TypeDef>,
    name_to_id: HashMap<String, TypeId>,
}

impl TypeRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an atomic type with a fixed size and alignment
    ///
    /// # Errors
    /// `InvalidParameter` if `size` or `alignment` is not positive,
    /// `DuplicateType` if `name` is taken.
    pub fn register_atomic(&mut self, name: &str, size: i64, alignment: i64) -> Result<TypeId> {
        let size = positive("size", size)?;
        let alignment = positive("alignment", alignment)?;
        self.ensure_available(name)?;

        let id = self.next_id()?;
        self.insert(TypeDef::atomic(id, name.to_string(), size, alignment));
        tracing::debug!(name, size, alignment, "registered atomic type");
        Ok(id)
    }

    /// Registers a struct whose members are the named, already-registered types
    ///
    /// # Errors
    /// `UnknownType` naming the first member that is not registered,
    /// `DuplicateType` if `name` is taken, `LayoutOverflow` if the size does
    /// not fit in a `u64`.
    pub fn register_struct<S: AsRef<str>>(
        &mut self,
        name: &str,
        member_names: &[S],
    ) -> Result<TypeId> {
        self.ensure_available(name)?;
        let members = self.resolve(member_names)?;

        let id = self.next_id()?;
        let def = TypeDef::structure(id, name.to_string(), &members)?;
        tracing::debug!(
            name,
            members = members.len(),
            size = def.size(),
            alignment = def.alignment(),
            "registered struct type"
        );
        self.insert(def);
        Ok(id)
    }

    /// Registers a union whose members are the named, already-registered types
    ///
    /// # Errors
    /// `UnknownType` naming the first member that is not registered,
    /// `DuplicateType` if `name` is taken, `LayoutOverflow` if the size does
    /// not fit in a `u64`.
    pub fn register_union<S: AsRef<str>>(
        &mut self,
        name: &str,
        member_names: &[S],
    ) -> Result<TypeId> {
        self.ensure_available(name)?;
        let members = self.resolve(member_names)?;

        let id = self.next_id()?;
        let def = TypeDef::union(id, name.to_string(), &members)?;
        tracing::debug!(
            name,
            members = members.len(),
            size = def.size(),
            alignment = def.alignment(),
            "registered union type"
        );
        self.insert(def);
        Ok(id)
    }

    /// Describes a registered type
    ///
    /// Structs are reported under every strategy, in [`LayoutStrategy::ALL`] order.
    ///
    /// # Errors
    /// `UnknownType` if `name` is not registered, `LayoutOverflow` if the
    /// Optimal layout of a struct does not fit in a `u64`.
    #[tracing::instrument(level = "debug", skip_all, fields(name = %name))]
    pub fn describe(&self, name: &str) -> Result<Description> {
        let def = self.lookup(name)?;
        let description = match def.kind() {
            TypeKind::Atomic { size, alignment } => Description::Atomic {
                name: def.name().to_string(),
                size: *size,
                alignment: *alignment,
            },
            TypeKind::Union { members } => Description::Union {
                name: def.name().to_string(),
                size: def.size(),
                alignment: def.alignment(),
                members: members.len(),
            },
            TypeKind::Struct { .. } => Description::Struct {
                name: def.name().to_string(),
                alignment: def.alignment(),
                strategies: LayoutStrategy::ALL
                    .iter()
                    .map(|&strategy| {
                        def.calculate_layout(self, strategy).map(|layout| StrategyReport {
                            strategy,
                            size: layout.size,
                            waste: layout.waste,
                        })
                    })
                    .collect::<Result<_>>()?,
            },
        };
        Ok(description)
    }

    /// Computes the full placement of a registered struct
    ///
    /// # Errors
    /// `UnknownType` if `name` is not registered, `NotAStruct` for atomics and unions.
    pub fn layout(&self, name: &str, strategy: LayoutStrategy) -> Result<Layout> {
        self.lookup(name)?.calculate_layout(self, strategy)
    }

    /// Looks up a definition by TypeId
    pub fn get(&self, id: TypeId) -> Option<&TypeDef> {
        self.types.get(id.index())
    }

    /// Looks up a TypeId by type name
    pub fn get_by_name(&self, name: &str) -> Option<TypeId> {
        self.name_to_id.get(name).copied()
    }

    /// Looks up a definition by name, failing with `UnknownType`
    pub fn lookup(&self, name: &str) -> Result<&TypeDef> {
        self.get_by_name(name)
            .map(|id| self.get_def(id))
            .ok_or_else(|| Error::UnknownType(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_to_id.contains_key(name)
    }

    /// Canonical size of a registered type
    pub fn size_of(&self, id: TypeId) -> Option<u64> {
        self.get(id).map(TypeDef::size)
    }

    pub fn alignment_of(&self, id: TypeId) -> Option<u64> {
        self.get(id).map(TypeDef::alignment)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Definitions in registration order
    pub fn iter(&self) -> impl Iterator<Item = &TypeDef> {
        self.types.iter()
    }

    /// Gets the definition behind a handle this registry issued
    #[inline]
    pub(crate) fn get_def(&self, id: TypeId) -> &TypeDef {
        &self.types[id.index()]
    }

    fn next_id(&self) -> Result<TypeId> {
        TypeId::from_index(self.types.len()).ok_or(Error::RegistryFull)
    }

    fn insert(&mut self, def: TypeDef) {
        self.name_to_id.insert(def.name().to_string(), def.id());
        self.types.push(def);
    }

    fn ensure_available(&self, name: &str) -> Result<()> {
        if self.contains(name) {
            return Err(Error::DuplicateType(name.to_string()));
        }
        Ok(())
    }

    /// Resolves every member name before anything is inserted
    fn resolve<S: AsRef<str>>(&self, member_names: &[S]) -> Result<Vec<&TypeDef>> {
        member_names
            .iter()
            .map(|name| self.lookup(name.as_ref()))
            .collect()
    }
}

fn positive(what: &str, value: i64) -> Result<u64> {
    u64::try_from(value)
        .ok()
        .filter(|&v| v > 0)
        .ok_or_else(|| Error::InvalidParameter(format!("{what} must be positive, got {value}")))
}
