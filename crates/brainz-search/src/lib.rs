// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed MusicBrainz search builders.
//!
//! Each entity type gets a field enumeration and a [`Search`] builder that
//! assembles a [`brainz_lucene::Query`] from those fields. A finished search
//! becomes a [`SearchRequest`], whose URL is handed to whatever HTTP client
//! performs the call.

pub mod entity;
pub mod error;
pub mod fields;
pub mod request;
pub mod search;

pub use entity::{Entity, SearchField};
pub use error::{Result, SearchError};
pub use fields::{ArtistField, RecordingField, ReleaseField, ReleaseGroupField, UnknownFieldName};
pub use request::{SearchRequest, MAX_LIMIT, MUSICBRAINZ_API_BASE};
pub use search::{ArtistSearch, RecordingSearch, ReleaseGroupSearch, ReleaseSearch, Search};
