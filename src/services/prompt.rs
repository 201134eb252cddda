// src/services/prompt.rs

/// Build the system prompt steering the hosted model. Pure function of
/// language and category; unrecognized categories are interpolated as-is so
/// the model can still react to them.
pub fn build_system_prompt(language: &str, category: &str) -> String {
    format!(
        "You are Bantuan, a friendly multilingual support assistant for ASEAN countries.\n\
         You speak fluent {language} and help users in the {category} category.\n\
         You are helpful, professional, and patient.\n\
         Keep responses concise (2-3 sentences max).\n\
         Always respond in {language}.\n\
         User's current category: {category}\n\
         \n\
         Available categories:\n\
         - technical: For technical issues and troubleshooting\n\
         - account: For account and profile related queries\n\
         - billing: For billing and payment questions\n\
         - general: For general inquiries\n\
         \n\
         Respond naturally to the user's message in their language."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_mentions_language_and_category() {
        let prompt = build_system_prompt("th", "billing");
        assert!(prompt.contains("fluent th"));
        assert!(prompt.contains("billing category"));
        assert!(prompt.contains("2-3 sentences"));
    }

    #[test]
    fn unrecognized_category_passes_through() {
        let prompt = build_system_prompt("en", "shipping");
        assert!(prompt.contains("shipping category"));
    }
}
