/// A stored client row. Every contact attribute is nullable; `phones` is a
/// Postgres text array that may itself be NULL (distinct from empty, though
/// nothing in the registry depends on the difference).
#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct Client {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phones: Option<Vec<String>>,
}

impl Client {
    /// Phone numbers as a slice, treating a NULL array as empty.
    pub fn phones(&self) -> &[String] {
        self.phones.as_deref().unwrap_or_default()
    }
}

/// Payload for inserting a client. Omitted fields are stored as NULL;
/// an all-`None` insert is legal.
#[derive(Debug, Clone, Default)]
pub struct NewClient {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phones: Option<Vec<String>>,
}

/// Partial update for a client. A field is applied only when it is
/// provided, meaning `Some` and non-empty; `None`, `Some("")` and
/// `Some(vec![])` all leave the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct ClientPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phones: Option<Vec<String>>,
}

impl ClientPatch {
    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    pub fn phones(mut self, value: Vec<String>) -> Self {
        self.phones = Some(value);
        self
    }

    /// True when no field is provided; such a patch issues no statement.
    pub fn is_empty(&self) -> bool {
        provided(&self.first_name).is_none()
            && provided(&self.last_name).is_none()
            && provided(&self.email).is_none()
            && self.phones.as_deref().map_or(true, <[String]>::is_empty)
    }
}

/// Exact-match criteria for `find_client`. A record matches when ANY
/// provided criterion equals the stored field, or `phone` appears anywhere
/// in the stored phone array. Omitted criteria bind NULL and never match,
/// so an all-`None` query matches nothing.
#[derive(Debug, Clone, Default)]
pub struct ClientQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ClientQuery {
    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    pub fn phone(mut self, value: impl Into<String>) -> Self {
        self.phone = Some(value.into());
        self
    }
}

/// Some-and-non-empty filter shared by patch handling.
pub(crate) fn provided(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_patch_is_empty() {
        assert!(ClientPatch::default().is_empty());
    }

    #[test]
    fn empty_strings_and_lists_do_not_count_as_provided() {
        let patch = ClientPatch::default()
            .first_name("")
            .email("")
            .phones(Vec::new());
        assert!(patch.is_empty());
    }

    #[test]
    fn any_provided_field_makes_a_patch_nonempty() {
        assert!(!ClientPatch::default().last_name("Doe").is_empty());
        assert!(!ClientPatch::default().phones(vec!["555".into()]).is_empty());
    }

    #[test]
    fn null_phone_array_reads_as_empty_slice() {
        let client = Client {
            id: 1,
            first_name: None,
            last_name: None,
            email: None,
            phones: None,
        };
        assert!(client.phones().is_empty());
    }
}
