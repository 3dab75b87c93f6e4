//! Boilerplate task descriptions.
//!
//! Imported outlines only carry titles, so each new task gets a fixed
//! sentence that names the title in bold. The wording matches the
//! descriptions already present in the task stores this tool feeds.

/// Generate the description for a task title.
///
/// Pure and deterministic: the same title always yields the same text.
#[must_use]
pub fn generate_description(title: &str) -> String {
    format!(
        "Esta tarefa tem como objetivo implementar, revisar ou aprimorar o item \
         **{title}**, garantindo aderência aos requisitos funcionais, técnicos e \
         de qualidade do projeto. Inclui análise, desenvolvimento, validação, \
         documentação e ajustes necessários para sua correta entrega."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_embedded_in_bold() {
        let desc = generate_description("Add login");
        assert!(desc.contains("**Add login**"));
    }

    #[test]
    fn test_is_deterministic() {
        assert_eq!(generate_description("Deploy"), generate_description("Deploy"));
    }

    #[test]
    fn test_exact_template() {
        assert_eq!(
            generate_description("X"),
            "Esta tarefa tem como objetivo implementar, revisar ou aprimorar o item **X**, \
             garantindo aderência aos requisitos funcionais, técnicos e de qualidade do \
             projeto. Inclui análise, desenvolvimento, validação, documentação e ajustes \
             necessários para sua correta entrega."
        );
    }

    #[test]
    fn test_title_is_verbatim() {
        let desc = generate_description("Use `cargo` & <tags>");
        assert!(desc.contains("**Use `cargo` & <tags>**"));
    }
}
