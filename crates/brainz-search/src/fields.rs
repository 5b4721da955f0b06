// SPDX-License-Identifier: GPL-3.0-or-later

//! Search field enumerations per entity type.
//!
//! See the MusicBrainz [search](https://musicbrainz.org/doc/MusicBrainz_API/Search)
//! documentation for what each field matches.

use thiserror::Error;

use crate::entity::{Entity, SearchField};

/// Unknown field name passed to one of the field enumerations' `FromStr`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search field: {0}")]
pub struct UnknownFieldName(pub String);

macro_rules! search_fields {
    (
        $(#[$meta:meta])*
        $name:ident => $entity:expr,
        { $( $(#[$vmeta:meta])* $variant:ident = $value:literal ),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        impl SearchField for $name {
            const ENTITY: Entity = $entity;

            fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $value ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownFieldName;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                let s = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|field| field.name() == s)
                    .ok_or_else(|| UnknownFieldName(s.to_string()))
            }
        }
    };
}

search_fields! {
    ArtistField => Entity::Artist,
    {
        /// (part of) any alias attached to the artist (diacritics are ignored)
        Alias = "alias",
        PrimaryAlias = "primary_alias",
        /// (part of) the name of the artist's main associated area
        Area = "area",
        /// the artist's MBID
        ArtistId = "arid",
        /// the artist's name (without accented characters)
        Artist = "artist",
        /// the artist's name (with accented characters)
        ArtistAccent = "artistaccent",
        Begin = "begin",
        BeginArea = "beginarea",
        Comment = "comment",
        /// ISO 3166-1 alpha-2 code of the main associated country, or "unknown"
        Country = "country",
        /// searches the artist's aliases, name and sort name
        Default = "",
        End = "end",
        EndArea = "endarea",
        Ended = "ended",
        Gender = "gender",
        Ipi = "ipi",
        Isni = "isni",
        SortName = "sortname",
        Tag = "tag",
        Type = "type",
    }
}

search_fields! {
    ReleaseField => Entity::Release,
    {
        Alias = "alias",
        ArtistId = "arid",
        /// combined credited artist name, including join phrases (e.g. "Artist X feat.")
        Artist = "artist",
        ArtistName = "artistname",
        Asin = "asin",
        Barcode = "barcode",
        /// catalog number (insensitive to case, spaces, and separators)
        CatalogNumber = "catno",
        Comment = "comment",
        Country = "country",
        CreditName = "creditname",
        /// a release date, e.g. "1980-01-22"
        Date = "date",
        /// searches the release title
        Default = "",
        DiscIdCount = "discids",
        MediumDiscCount = "discidsmedium",
        Format = "format",
        LabelId = "laid",
        Label = "label",
        /// ISO 639-3 code of the release language
        Language = "lang",
        MediumCount = "mediums",
        MediumTrackCount = "tracksmedium",
        Packaging = "packaging",
        PrimaryType = "primarytype",
        Quality = "quality",
        ReleaseId = "reid",
        Release = "release",
        ReleaseAccentedName = "releaseaccent",
        ReleaseGroupId = "rgid",
        Script = "script",
        SecondaryType = "secondarytype",
        Status = "status",
        Tag = "tag",
        TrackCount = "tracks",
    }
}

search_fields! {
    ReleaseGroupField => Entity::ReleaseGroup,
    {
        Alias = "alias",
        ArtistId = "arid",
        Artist = "artist",
        ArtistName = "artistname",
        Comment = "comment",
        CreditName = "creditname",
        /// searches the release group title
        Default = "",
        FirstReleaseDate = "firstreleasedate",
        PrimaryType = "primarytype",
        ReleaseId = "reid",
        Release = "release",
        ReleaseGroup = "releasegroup",
        ReleaseGroupAccentedName = "releasegroupaccent",
        /// number of releases in the release group
        Releases = "releases",
        ReleaseGroupId = "rgid",
        SecondaryType = "secondarytype",
        Status = "status",
        Tag = "tag",
    }
}

search_fields! {
    RecordingField => Entity::Recording,
    {
        Alias = "alias",
        ArtistId = "arid",
        Artist = "artist",
        ArtistName = "artistname",
        Comment = "comment",
        Country = "country",
        CreditName = "creditname",
        Date = "date",
        /// searches the recording title
        Default = "",
        /// recording duration in milliseconds
        Duration = "dur",
        FirstReleaseDate = "firstreleasedate",
        Format = "format",
        Isrc = "isrc",
        Number = "number",
        Position = "position",
        PrimaryType = "primarytype",
        /// duration quantized into 2 second buckets
        QuantizedDuration = "qdur",
        Recording = "recording",
        RecordingAccent = "recordingaccent",
        Release = "release",
        ReleaseId = "reid",
        ReleaseGroupId = "rgid",
        RecordingId = "rid",
        SecondaryType = "secondarytype",
        Status = "status",
        Tag = "tag",
        TrackId = "tid",
        TrackNumber = "tnum",
        TrackCount = "tracks",
        ReleaseTrackCount = "tracksrelease",
        Video = "video",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names() {
        assert_eq!(ReleaseField::CatalogNumber.name(), "catno");
        assert_eq!(ArtistField::PrimaryAlias.to_string(), "primary_alias");
        assert_eq!(RecordingField::Default.name(), "");
        assert_eq!(ArtistField::Default.name(), "");
        assert_eq!(ReleaseField::Default.name(), "");
        assert_eq!(<ReleaseGroupField as SearchField>::ENTITY, Entity::ReleaseGroup);
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!("qdur".parse::<RecordingField>(), Ok(RecordingField::QuantizedDuration));
        assert_eq!(" rgid ".parse::<ReleaseField>(), Ok(ReleaseField::ReleaseGroupId));
        assert_eq!(
            "isrc".parse::<ArtistField>(),
            Err(UnknownFieldName("isrc".to_string()))
        );
        assert_eq!("".parse::<ArtistField>(), Ok(ArtistField::Default));
        assert_eq!(
            UnknownFieldName("isrc".to_string()).to_string(),
            "unknown search field: isrc"
        );
    }

    #[test]
    fn test_field_names_unique_per_entity() {
        fn assert_unique<F: SearchField>(all: &[F]) {
            let mut names: Vec<_> = all.iter().map(|f| f.name()).collect();
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), total, "{:?}", F::ENTITY);
        }
        assert_unique(ArtistField::ALL);
        assert_unique(ReleaseField::ALL);
        assert_unique(ReleaseGroupField::ALL);
        assert_unique(RecordingField::ALL);
    }
}
