use std::fmt;

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every field that failed validation for one command.
///
/// Commands are validated as a whole so callers see all problems at once,
/// not just the first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`.
    pub fn add(&mut self, field: &'static str, message: impl ToString) {
        self.0.push(FieldError {
            field,
            message: message.to_string(),
        });
    }

    /// Keep the value of a successful check, record the error of a failed one.
    pub fn check<T, E: fmt::Display>(
        &mut self,
        field: &'static str,
        result: Result<T, E>,
    ) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.add(field, e);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    /// Names of the failing fields, in the order they were checked.
    pub fn field_names(&self) -> Vec<&'static str> {
        self.0.iter().map(|e| e.field).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", rendered.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_collects_failures_in_order() {
        let mut errors = ValidationErrors::new();

        let ok: Option<u8> = errors.check("age", Ok::<u8, String>(3));
        let bad: Option<u8> = errors.check("name", Err::<u8, _>("Name is required"));
        errors.add("email", "Invalid email");

        assert_eq!(ok, Some(3));
        assert_eq!(bad, None);
        assert_eq!(errors.field_names(), vec!["name", "email"]);
        assert_eq!(
            errors.to_string(),
            "name: Name is required; email: Invalid email"
        );
    }
}
