use serde::{Deserialize, Serialize};

/// One contact record. All fields are free-form text and may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Entry {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub organization: String,
    pub work_phone: String,
    pub personal_phone: String,
}

/// The whole contact list, in insertion order. This is the unit of persistence.
pub type Directory = Vec<Entry>;

/// Names the six fields of an [`Entry`], in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryField {
    LastName,
    FirstName,
    MiddleName,
    Organization,
    WorkPhone,
    PersonalPhone,
}

impl EntryField {
    pub const ALL: [EntryField; 6] = [
        EntryField::LastName,
        EntryField::FirstName,
        EntryField::MiddleName,
        EntryField::Organization,
        EntryField::WorkPhone,
        EntryField::PersonalPhone,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EntryField::LastName => "Last name",
            EntryField::FirstName => "First name",
            EntryField::MiddleName => "Middle name",
            EntryField::Organization => "Organization",
            EntryField::WorkPhone => "Work phone",
            EntryField::PersonalPhone => "Personal phone",
        }
    }
}

impl Entry {
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        middle_name: impl Into<String>,
        organization: impl Into<String>,
        work_phone: impl Into<String>,
        personal_phone: impl Into<String>,
    ) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            middle_name: middle_name.into(),
            organization: organization.into(),
            work_phone: work_phone.into(),
            personal_phone: personal_phone.into(),
        }
    }

    pub fn get(&self, field: EntryField) -> &str {
        match field {
            EntryField::LastName => &self.last_name,
            EntryField::FirstName => &self.first_name,
            EntryField::MiddleName => &self.middle_name,
            EntryField::Organization => &self.organization,
            EntryField::WorkPhone => &self.work_phone,
            EntryField::PersonalPhone => &self.personal_phone,
        }
    }

    pub fn set(&mut self, field: EntryField, value: impl Into<String>) {
        let slot = match field {
            EntryField::LastName => &mut self.last_name,
            EntryField::FirstName => &mut self.first_name,
            EntryField::MiddleName => &mut self.middle_name,
            EntryField::Organization => &mut self.organization,
            EntryField::WorkPhone => &mut self.work_phone,
            EntryField::PersonalPhone => &mut self.personal_phone,
        };
        *slot = value.into();
    }

    /// "Last First Middle", skipping empty parts.
    pub fn full_name(&self) -> String {
        [&self.last_name, &self.first_name, &self.middle_name]
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// True if any field contains `needle_lower` once lowercased.
    ///
    /// The caller lowercases the needle once per search rather than once per entry.
    pub fn matches_lowercase(&self, needle_lower: &str) -> bool {
        EntryField::ALL
            .iter()
            .any(|field| self.get(*field).to_lowercase().contains(needle_lower))
    }
}
