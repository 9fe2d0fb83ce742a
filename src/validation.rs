// Form validation - constraint descriptors and a pure predicate
//
// A descriptor pairs a raw value with optional constraints. Only the
// constraints that are present are checked, and all bounds are exclusive.
// Length bounds only apply to text and numeric bounds only apply to numbers;
// a bound on the wrong kind of value is skipped, not reported.

/// The value being validated
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
}

impl Value {
    /// String form, as used by the `required` check
    fn as_string(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Number(n) => n.to_string(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

/// A value plus the constraints it must satisfy
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: Value,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    /// Descriptor with no constraints
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Check every present constraint; true only if all of them hold
pub fn validate(input: &Validatable) -> bool {
    let mut is_valid = true;

    if input.required {
        is_valid = is_valid && !input.value.as_string().trim().is_empty();
    }

    if let Value::Text(text) = &input.value {
        let len = text.chars().count();
        if let Some(min_length) = input.min_length {
            is_valid = is_valid && len > min_length;
        }
        if let Some(max_length) = input.max_length {
            is_valid = is_valid && len < max_length;
        }
    }

    if let Value::Number(n) = input.value {
        if let Some(min) = input.min {
            is_valid = is_valid && n > min;
        }
        if let Some(max) = input.max {
            is_valid = is_valid && n < max;
        }
    }

    is_valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_constraints_always_passes() {
        assert!(validate(&Validatable::new("")));
        assert!(validate(&Validatable::new(-1.0)));
    }

    #[test]
    fn required_rejects_blank_text() {
        assert!(!validate(&Validatable::new("").required()));
        assert!(!validate(&Validatable::new("   \t").required()));
        assert!(validate(&Validatable::new(" x ").required()));
    }

    #[test]
    fn required_number_uses_string_form() {
        assert!(validate(&Validatable::new(0.0).required()));
    }

    #[test]
    fn length_bounds_are_exclusive() {
        let five = Validatable::new("abcde").min_length(5);
        assert!(!validate(&five));

        let six = Validatable::new("abcdef").min_length(5);
        assert!(validate(&six));

        assert!(!validate(&Validatable::new("a".repeat(20)).max_length(20)));
        assert!(validate(&Validatable::new("a".repeat(19)).max_length(20)));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 7 chars, 13 bytes
        assert!(validate(&Validatable::new("ééééé é").min_length(5).max_length(8)));
    }

    #[test]
    fn numeric_bounds_are_exclusive() {
        assert!(!validate(&Validatable::new(2.0).min(2.0)));
        assert!(validate(&Validatable::new(3.0).min(2.0)));
        assert!(!validate(&Validatable::new(10.0).max(10.0)));
        assert!(validate(&Validatable::new(9.5).max(10.0)));
    }

    #[test]
    fn mismatched_constraints_are_skipped() {
        // Length bounds on a number and numeric bounds on text impose nothing
        assert!(validate(&Validatable::new(1.0).min_length(5).max_length(2)));
        assert!(validate(&Validatable::new("1").min(2.0).max(0.0)));
    }

    #[test]
    fn all_present_constraints_combine() {
        let description = |s: &str| {
            Validatable::new(s)
                .required()
                .min_length(5)
                .max_length(20)
        };
        assert!(!validate(&description("hi")));
        assert!(validate(&description("A small shed")));
        assert!(!validate(&description("this description is far too long")));
    }
}
