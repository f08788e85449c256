use serde::{Deserialize, Serialize};

use crate::model::ids::ArtistId;

/// An artist or band as published by the remote catalog.
///
/// `locations` is never decoded from the wire. It is a pre-joined cache of
/// `"city, country"` labels that [`Catalog`](crate::Catalog) fills from the
/// relation table, so it stays empty on a freshly decoded record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,

    #[serde(default)]
    pub image: String,

    /// Member names in the order the catalog lists them.
    #[serde(default)]
    pub members: Vec<String>,

    /// Year the artist was formed.
    #[serde(default)]
    pub creation_date: i64,

    /// Free-form first-album descriptor, e.g. `"14-12-1973"` or `"Queen (1973)"`.
    #[serde(default)]
    pub first_album: String,

    #[serde(skip)]
    pub locations: Vec<String>,
}

impl Artist {
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: ArtistId::new(id),
            name: name.into(),
            image: String::new(),
            members: Vec::new(),
            creation_date: 0,
            first_album: String::new(),
            locations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.members.push(member.into());
        self
    }

    #[must_use]
    pub fn with_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members.extend(members.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_creation_date(mut self, year: i64) -> Self {
        self.creation_date = year;
        self
    }

    #[must_use]
    pub fn with_first_album(mut self, first_album: impl Into<String>) -> Self {
        self.first_album = first_album.into();
        self
    }

    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = url.into();
        self
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}
