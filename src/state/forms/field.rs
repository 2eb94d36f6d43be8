//! Form field identifiers

/// How a field is edited and displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    /// Masked unless the password is revealed
    Password,
    Number,
    /// Cycles through a fixed list of options
    Select,
}

/// The six registration form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Name,
    Email,
    Password,
    Age,
    Phone,
    Country,
}

impl FieldName {
    pub const ALL: [FieldName; 6] = [
        Self::Name,
        Self::Email,
        Self::Password,
        Self::Age,
        Self::Phone,
        Self::Country,
    ];

    /// Stable identifier, also used in validation messages
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::Age => "age",
            Self::Phone => "phone",
            Self::Country => "country",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email Address",
            Self::Password => "Password",
            Self::Age => "Age",
            Self::Phone => "Phone",
            Self::Country => "Country",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "e.g. Juan Perez",
            Self::Email => "example@mail.com",
            Self::Password => "At least 8 characters",
            Self::Age => "18",
            Self::Phone => "3001234567",
            Self::Country => "Select an option",
        }
    }

    pub fn kind(&self) -> InputKind {
        match self {
            Self::Name | Self::Phone => InputKind::Text,
            Self::Email => InputKind::Email,
            Self::Password => InputKind::Password,
            Self::Age => InputKind::Number,
            Self::Country => InputKind::Select,
        }
    }

    /// Position in [`FieldName::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}
