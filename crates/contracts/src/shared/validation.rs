//! Validation rules for editable form fields

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub email: bool,
    pub custom_error: Option<&'static str>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            email: false,
            custom_error: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn with_email(self) -> Self {
        Self {
            email: true,
            ..self
        }
    }

    pub const fn with_length(self, min: usize, max: usize) -> Self {
        Self {
            min_length: Some(min),
            max_length: Some(max),
            ..self
        }
    }

    pub const fn with_range(self, min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..self
        }
    }

    pub const fn with_error(self, message: &'static str) -> Self {
        Self {
            custom_error: Some(message),
            ..self
        }
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules.
    ///
    /// Empty optional values pass without further checks.
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            if self.required {
                return Err(self.message(format!("{} is required", field_label)));
            }
            return Ok(());
        }

        let length = trimmed.chars().count();
        if let Some(min) = self.min_length {
            if length < min {
                return Err(self.message(format!(
                    "{} must be at least {} characters",
                    field_label, min
                )));
            }
        }

        if let Some(max) = self.max_length {
            if length > max {
                return Err(self.message(format!(
                    "{} must not exceed {} characters",
                    field_label, max
                )));
            }
        }

        if self.email && !looks_like_email(trimmed) {
            return Err(self.message(format!("{} must be a valid email address", field_label)));
        }

        if self.min.is_some() || self.max.is_some() {
            let number: f64 = trimmed
                .parse()
                .map_err(|_| self.message(format!("{} must be a number", field_label)))?;
            self.validate_number(number, field_label)?;
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(self.message(format!("{} must be at least {}", field_label, min)));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(self.message(format!("{} must not exceed {}", field_label, max)));
            }
        }

        Ok(())
    }

    fn message(&self, default: String) -> String {
        self.custom_error.map(String::from).unwrap_or(default)
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.starts_with('.')
                && domain.contains('.')
                && !domain.ends_with('.')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    }
}
