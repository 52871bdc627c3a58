// 🔑 Property Access & Key Validation
// Typed keys for records known at compile time, membership checks for dynamic ones
//
// A `Field<R, V>` is built in-crate next to the record type it reads, so a
// lookup with a key that is not a field of `R` does not compile.

use crate::error::{Result, UtilError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use tracing::debug;

// ============================================================================
// TYPED FIELD KEYS
// ============================================================================

/// A statically known field of record type `R` holding a `V`.
pub struct Field<R, V> {
    name: &'static str,
    read: fn(&R) -> &V,
}

impl<R, V> Field<R, V> {
    pub(crate) const fn new(name: &'static str, read: fn(&R) -> &V) -> Self {
        Field { name, read }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

// Manual impls: deriving would demand `R: Clone` and `V: Clone`
impl<R, V> Clone for Field<R, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, V> Copy for Field<R, V> {}

impl<R, V> fmt::Debug for Field<R, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish()
    }
}

/// Project one field out of a record. Never mutates, never fails.
pub fn get_property<R, V>(record: &R, field: Field<R, V>) -> &V {
    (field.read)(record)
}

/// Look up `key` on a dynamic record.
///
/// A missing key is `UtilError::InvalidKey`; a key present with `null` is returned as-is.
pub fn get_json_property<'a>(record: &'a Value, key: &str) -> Result<&'a Value> {
    let object = record
        .as_object()
        .ok_or_else(|| UtilError::NotARecord(record.to_string()))?;

    object.get(key).ok_or_else(|| {
        debug!(key, "Property lookup on missing key");
        UtilError::invalid_key(key)
    })
}

// ============================================================================
// RECORD TRAIT
// ============================================================================

/// Anything that can answer "is this field present?".
///
/// Presence is structural: a field holding `None`/`null` is still present.
pub trait Record {
    fn has_field(&self, name: &str) -> bool;
}

impl Record for Map<String, Value> {
    fn has_field(&self, name: &str) -> bool {
        self.contains_key(name)
    }
}

impl Record for Value {
    fn has_field(&self, name: &str) -> bool {
        self.as_object().is_some_and(|object| object.contains_key(name))
    }
}

impl<V> Record for HashMap<String, V> {
    fn has_field(&self, name: &str) -> bool {
        self.contains_key(name)
    }
}

impl<V> Record for BTreeMap<String, V> {
    fn has_field(&self, name: &str) -> bool {
        self.contains_key(name)
    }
}

// ============================================================================
// KEY SET VALIDATION
// ============================================================================

/// True iff every key is present on `record`. An empty key list is vacuously true.
pub fn has_all_keys<R, K>(record: &R, keys: &[K]) -> bool
where
    R: Record + ?Sized,
    K: AsRef<str>,
{
    keys.iter()
        .all(|key| record.has_field(<K as AsRef<str>>::as_ref(key)))
}

/// Keys absent from `record`, in the order they were asked for.
pub fn missing_keys<R, K>(record: &R, keys: &[K]) -> Vec<String>
where
    R: Record + ?Sized,
    K: AsRef<str>,
{
    keys.iter()
        .map(<K as AsRef<str>>::as_ref)
        .filter(|key| !record.has_field(key))
        .map(str::to_string)
        .collect()
}

// ============================================================================
// PERSON
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

fn person_name(person: &Person) -> &String {
    &person.name
}

fn person_age(person: &Person) -> &u32 {
    &person.age
}

impl Person {
    pub const NAME: Field<Person, String> = Field::new("name", person_name);
    pub const AGE: Field<Person, u32> = Field::new("age", person_age);

    pub const FIELDS: [&'static str; 2] = ["name", "age"];

    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Person { name: name.into(), age }
    }
}

impl Record for Person {
    fn has_field(&self, name: &str) -> bool {
        Self::FIELDS.contains(&name)
    }
}

// ============================================================================
// TESTS
// ============================================================================
