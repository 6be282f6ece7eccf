//! Templated answer generation.
//!
//! No inference happens here: the answer echoes the question and names the
//! selected data sources.

/// Builds the simulated answer stored with each query.
#[derive(Debug, Clone)]
pub struct Responder {
    product_name: String,
}

impl Responder {
    pub fn new(product_name: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
        }
    }

    /// Compose the answer for `query`.
    ///
    /// When `data_sources` is non-empty the answer names them, comma
    /// separated, in the order given.
    pub fn respond(&self, query: &str, data_sources: &[String]) -> String {
        let sources = if data_sources.is_empty() {
            String::new()
        } else {
            format!(" Searched across {} data sources.", data_sources.join(", "))
        };

        format!(
            "I understand you're asking about: \"{}\".{} This is a simulated AI response that would \
             normally be processed by {}'s intelligent analysis system using the selected data sources.",
            query, sources, self.product_name
        )
    }

    /// Title given to sessions opened from the UI.
    pub fn session_title(&self) -> String {
        format!("{} Session", self.product_name)
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new("REG AI Insight")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_response_quotes_query() {
        let answer = Responder::default().respond("What is the SLA?", &[]);
        assert!(answer.starts_with("I understand you're asking about: \"What is the SLA?\"."));
        assert!(!answer.contains("Searched across"));
        assert!(answer.contains("REG AI Insight's intelligent analysis system"));
    }

    #[test]
    fn test_response_names_sources_in_order() {
        let answer =
            Responder::default().respond("What is the SLA?", &sources(&["jira", "confluence"]));
        assert!(answer.contains(" Searched across jira, confluence data sources. "));
    }

    #[test]
    fn test_single_source_has_no_separator() {
        let answer = Responder::default().respond("q", &sources(&["cree"]));
        assert!(answer.contains("Searched across cree data sources."));
        assert!(!answer.contains("cree,"));
    }

    #[test]
    fn test_reversed_selection_keeps_order() {
        let answer = Responder::default().respond("q", &sources(&["fr", "sierra", "cslink"]));
        assert!(answer.contains("fr, sierra, cslink"));
    }

    #[test]
    fn test_exact_template() {
        let answer = Responder::new("Acme").respond("hi", &sources(&["brd"]));
        assert_eq!(
            answer,
            "I understand you're asking about: \"hi\". Searched across brd data sources. This is a \
             simulated AI response that would normally be processed by Acme's intelligent analysis \
             system using the selected data sources."
        );
    }

    #[test]
    fn test_session_title_uses_product_name() {
        assert_eq!(Responder::default().session_title(), "REG AI Insight Session");
        assert_eq!(Responder::new("Acme").session_title(), "Acme Session");
    }
}
