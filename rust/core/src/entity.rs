// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity records and coordinate extraction
//!
//! Entities are free-form key/value records. Only two keys matter here:
//! `classname` and `origin`, the latter formatted as `"<x> <y> <z>"`.

use crate::error::{Error, Result};
use rustc_hash::FxHashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classname prefix shared by all player spawn entities
pub const SPAWN_CLASSNAME_PREFIX: &str = "info_player_";

/// 3D coordinate parsed from an entity field
pub type Coordinate = (f64, f64, f64);

/// Key/value entity record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Entity {
    pub properties: FxHashMap<String, String>,
}

impl Entity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    #[inline]
    pub fn classname(&self) -> Option<&str> {
        self.get("classname")
    }

    /// Parsed `origin`, or `None` when the entity has no origin
    pub fn origin(&self) -> Option<Result<Coordinate>> {
        self.get("origin").map(parse_coordinate)
    }

    /// True for entities whose classname starts with `prefix`
    #[inline]
    pub fn is_class(&self, prefix: &str) -> bool {
        self.classname().is_some_and(|c| c.starts_with(prefix))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Entity {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Parse `"75 2 81"` into `(75.0, 2.0, 81.0)`.
///
/// Components are separated by single spaces; doubled or leading spaces
/// yield empty components and fail. Each component must be a complete
/// decimal float.
pub fn parse_coordinate(input: &str) -> Result<Coordinate> {
    let mut values = [0.0f64; 3];
    let mut count = 0;

    for part in input.split(' ') {
        if count == 3 {
            return Err(Error::coordinate_parse(input, "expected 3 components"));
        }
        values[count] = parse_component(input, part)?;
        count += 1;
    }

    if count != 3 {
        return Err(Error::coordinate_parse(
            input,
            format!("expected 3 components, found {}", count),
        ));
    }

    Ok((values[0], values[1], values[2]))
}

#[inline]
fn parse_component(input: &str, part: &str) -> Result<f64> {
    let trimmed = part.trim();
    if trimmed.is_empty() {
        return Err(Error::coordinate_parse(input, "empty component"));
    }
    fast_float::parse::<f64, _>(trimmed)
        .map_err(|_| Error::coordinate_parse(input, format!("invalid number {:?}", part)))
}

/// Origins of every entity that carries an `origin` field
pub fn entity_origins(entities: &[Entity]) -> Result<Vec<Coordinate>> {
    entities.iter().filter_map(Entity::origin).collect()
}

/// [`entity_origins`] flattened to `[x0, y0, z0, x1, ...]`
pub fn entity_origins_flat(entities: &[Entity]) -> Result<Vec<f64>> {
    let origins = entity_origins(entities)?;
    let mut flat = Vec::with_capacity(origins.len() * 3);
    for (x, y, z) in origins {
        flat.extend_from_slice(&[x, y, z]);
    }
    Ok(flat)
}

/// Origins of player spawn entities
pub fn spawn_points(entities: &[Entity]) -> Result<Vec<Coordinate>> {
    spawn_points_with_prefix(entities, SPAWN_CLASSNAME_PREFIX)
}

/// Origins of entities whose classname starts with `prefix`.
///
/// Entities without a classname are skipped; a matching entity without an
/// origin is an error.
pub fn spawn_points_with_prefix(entities: &[Entity], prefix: &str) -> Result<Vec<Coordinate>> {
    entities
        .iter()
        .filter(|e| e.is_class(prefix))
        .map(|e| {
            e.origin().unwrap_or_else(|| {
                Err(Error::MissingField {
                    field: "origin".to_string(),
                })
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("75 2 81").unwrap(), (75.0, 2.0, 81.0));
        assert_eq!(
            parse_coordinate("-12.5 0 1e3").unwrap(),
            (-12.5, 0.0, 1000.0)
        );
    }

    #[test]
    fn test_parse_coordinate_wrong_arity() {
        assert!(matches!(
            parse_coordinate("1 2"),
            Err(Error::CoordinateParse { .. })
        ));
        assert!(matches!(
            parse_coordinate("1 2 3 4"),
            Err(Error::CoordinateParse { .. })
        ));
        assert!(parse_coordinate("").is_err());
    }

    #[test]
    fn test_parse_coordinate_single_space_only() {
        // Doubled separators produce an empty component
        assert!(parse_coordinate("1  2 3").is_err());
        assert!(parse_coordinate(" 1 2 3").is_err());
        // Tabs are not separators
        assert!(parse_coordinate("1\t2 3").is_err());
    }

    #[test]
    fn test_parse_coordinate_garbage() {
        let err = parse_coordinate("1 two 3").unwrap_err();
        match err {
            Error::CoordinateParse { input, .. } => assert_eq!(input, "1 two 3"),
            other => panic!("unexpected error {:?}", other),
        }
        assert!(parse_coordinate("1 2 3x").is_err());
    }

    #[test]
    fn test_entity_origin() {
        let entity = Entity::new()
            .with("classname", "light")
            .with("origin", "1 2 3");
        assert_eq!(entity.classname(), Some("light"));
        assert_eq!(entity.origin(), Some(Ok((1.0, 2.0, 3.0))));
        assert_eq!(Entity::new().origin(), None);
    }

    #[test]
    fn test_entity_origins_and_flat() {
        let entities = vec![
            Entity::new().with("classname", "worldspawn"),
            Entity::new()
                .with("classname", "light")
                .with("origin", "1 2 3"),
            Entity::new()
                .with("classname", "info_player_start")
                .with("origin", "4 5 6"),
        ];

        assert_eq!(
            entity_origins(&entities).unwrap(),
            vec![(1.0, 2.0, 3.0), (4.0, 5.0, 6.0)]
        );
        assert_eq!(
            entity_origins_flat(&entities).unwrap(),
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]
        );
    }

    #[test]
    fn test_spawn_points() {
        let entities: Vec<Entity> = vec![
            [("classname", "info_player_start"), ("origin", "75 2 81")]
                .into_iter()
                .collect(),
            [("classname", "info_player_deathmatch"), ("origin", "0 0 -8")]
                .into_iter()
                .collect(),
            [("classname", "info_target"), ("origin", "9 9 9")]
                .into_iter()
                .collect(),
            [("origin", "1 1 1")].into_iter().collect(),
        ];

        assert_eq!(
            spawn_points(&entities).unwrap(),
            vec![(75.0, 2.0, 81.0), (0.0, 0.0, -8.0)]
        );
        assert_eq!(
            spawn_points_with_prefix(&entities, "info_").unwrap().len(),
            3
        );
    }

    #[test]
    fn test_spawn_without_origin_is_error() {
        let entities = vec![Entity::new().with("classname", "info_player_start")];
        assert_eq!(
            spawn_points(&entities),
            Err(Error::MissingField {
                field: "origin".to_string()
            })
        );
    }
}
