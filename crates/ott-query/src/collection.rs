use std::fmt;

/// One of the three fixed collections a report draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionRole {
    Organisation,
    Script,
    User,
}

impl CollectionRole {
    /// Response order for both endpoints.
    pub const ALL: [CollectionRole; 3] = [
        CollectionRole::Organisation,
        CollectionRole::Script,
        CollectionRole::User,
    ];

    /// Name of the backing collection in the database.
    pub fn collection(self) -> &'static str {
        match self {
            CollectionRole::Organisation => "organization",
            CollectionRole::Script => "script",
            CollectionRole::User => "ottuser",
        }
    }

    /// Key used in the field discovery response.
    pub fn label(self) -> &'static str {
        match self {
            CollectionRole::Organisation => "Organisation",
            CollectionRole::Script => "Script",
            CollectionRole::User => "User",
        }
    }

    /// Key used in the report response.
    pub fn report_key(self) -> &'static str {
        match self {
            CollectionRole::Organisation => "organisation",
            CollectionRole::Script => "script",
            CollectionRole::User => "user",
        }
    }
}

impl fmt::Display for CollectionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}
