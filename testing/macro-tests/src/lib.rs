//! Fixture types exercising the `TypeInit` derive end to end.

use typeinit::TypeInit;

///
/// Book
///

#[derive(Debug, TypeInit)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub author: String,
}

///
/// Labeled
///

#[derive(Debug, TypeInit)]
pub struct Labeled<T> {
    pub label: String,
    pub value: T,
}

///
/// Marker
///

#[derive(Debug, TypeInit)]
pub struct Marker;

///
/// Settings
///
/// Field types are echoed opaquely, paths and generics included.
///

#[derive(Debug, TypeInit)]
pub struct Settings {
    pub tags: Vec<String>,
    pub limits: std::collections::BTreeMap<String, u32>,
    pub retry: Option<std::time::Duration>,
}
