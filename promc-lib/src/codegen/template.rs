use crate::error::GenerateError;

/// A fixed text template with `{{name}}` placeholders.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    name: &'static str,
    text: &'static str,
}

impl Template {
    #[must_use]
    pub const fn new(name: &'static str, text: &'static str) -> Self {
        Self { name, text }
    }

    /// Append the template to `out`, substituting every placeholder from `vars`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::GenerationFault`] for an unclosed placeholder or one with no value.
    pub fn render_into(&self, out: &mut String, vars: &[(&str, &str)]) -> Result<(), GenerateError> {
        let mut rest = self.text;

        while let Some((literal, tail)) = rest.split_once("{{") {
            out.push_str(literal);

            let Some((key, after)) = tail.split_once("}}") else {
                return Err(GenerateError::fault(format!("template '{}' has an unclosed placeholder", self.name)));
            };

            let value = vars
                .iter()
                .find_map(|(name, value)| (*name == key).then_some(*value))
                .ok_or_else(|| GenerateError::fault(format!("template '{}' has no value for '{key}'", self.name)))?;

            out.push_str(value);
            rest = after;
        }

        out.push_str(rest);
        Ok(())
    }

    /// Render the template into a fresh string.
    ///
    /// # Errors
    ///
    /// See [`Self::render_into`].
    pub fn render(&self, vars: &[(&str, &str)]) -> Result<String, GenerateError> {
        let mut out = String::with_capacity(self.text.len());
        self.render_into(&mut out, vars)?;
        Ok(out)
    }
}
