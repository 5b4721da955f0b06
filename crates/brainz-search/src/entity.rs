// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SearchError};
use crate::fields::{ArtistField, RecordingField, ReleaseField, ReleaseGroupField};

/// Searchable MusicBrainz entity types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Artist,
    Release,
    ReleaseGroup,
    Recording,
}

impl Entity {
    pub const ALL: [Entity; 4] = [
        Entity::Artist,
        Entity::Release,
        Entity::ReleaseGroup,
        Entity::Recording,
    ];

    /// Path segment of the search endpoint, e.g. `release-group`.
    pub fn resource(self) -> &'static str {
        match self {
            Entity::Artist => "artist",
            Entity::Release => "release",
            Entity::ReleaseGroup => "release-group",
            Entity::Recording => "recording",
        }
    }

    /// Looks up `name` among this entity's search fields and returns the
    /// canonical field name.
    pub fn resolve_field(self, name: &str) -> Result<&'static str> {
        let resolved = match self {
            Entity::Artist => name.parse::<ArtistField>().map(|f| f.name()),
            Entity::Release => name.parse::<ReleaseField>().map(|f| f.name()),
            Entity::ReleaseGroup => name.parse::<ReleaseGroupField>().map(|f| f.name()),
            Entity::Recording => name.parse::<RecordingField>().map(|f| f.name()),
        };
        resolved.map_err(|source| SearchError::UnknownField {
            entity: self,
            name: name.to_string(),
            source,
        })
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resource())
    }
}

impl FromStr for Entity {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Entity::ALL
            .into_iter()
            .find(|entity| entity.resource() == normalized)
            .ok_or_else(|| SearchError::UnknownEntity(s.to_string()))
    }
}

/// A field that can be searched on one entity type.
pub trait SearchField: Copy + fmt::Debug {
    const ENTITY: Entity;

    /// Name used in the query string. Empty for the entity's default field.
    fn name(self) -> &'static str;
}
