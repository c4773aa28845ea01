//! Response types for the `/analyze` endpoint.

use serde::Deserialize;
use serde_json::Value;

use super::{deserialize_text, deserialize_text_list, display_text};
use crate::traits::{HttpError, Response};

/// Shown in the category slot when the service sends none.
pub const FALLBACK_CATEGORY: &str = "N/A";

/// Shown in the reply slot when the service sends none.
pub const FALLBACK_REPLY: &str = "Nenhuma resposta sugerida";

/// Error text for a failed response without an `error` field.
pub const UNKNOWN_ERROR: &str = "Erro desconhecido";

/// Prefix for failures where no usable response arrived.
pub const CONNECTION_ERROR_PREFIX: &str = "Erro de conexão: ";

/// Description used when the service answers with a JSON `null`.
const NULL_BODY: &str = "resposta vazia do serviço";

/// Body of a successful analysis.
///
/// Every field is optional; the service may omit any of them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalysisResult {
    /// Classification label, e.g. "PRODUTIVO"
    #[serde(default, rename = "categoria", deserialize_with = "deserialize_text")]
    pub category: Option<String>,
    /// Suggested reply text
    #[serde(
        default,
        rename = "resposta_automatica",
        deserialize_with = "deserialize_text"
    )]
    pub suggested_reply: Option<String>,
    /// Confidence, already formatted by the service (e.g. "87.0%")
    #[serde(default, rename = "confianca", deserialize_with = "deserialize_text")]
    pub confidence: Option<String>,
    /// Follow-up actions suggested for the email
    #[serde(
        default,
        rename = "acoes_sugeridas",
        deserialize_with = "deserialize_text_list"
    )]
    pub suggested_actions: Vec<String>,
    /// Which classifier produced the category
    #[serde(
        default,
        rename = "metodo_classificacao",
        deserialize_with = "deserialize_text"
    )]
    pub method: Option<String>,
    /// Which engine wrote the reply
    #[serde(default, rename = "gerado_por", deserialize_with = "deserialize_text")]
    pub generated_by: Option<String>,
    /// Free-text justification of the category
    #[serde(default, rename = "justificativa", deserialize_with = "deserialize_text")]
    pub reasoning: Option<String>,
}

impl AnalysisResult {
    /// Category text as displayed, falling back to [`FALLBACK_CATEGORY`].
    pub fn category_text(&self) -> &str {
        self.category.as_deref().unwrap_or(FALLBACK_CATEGORY)
    }

    /// Reply text as displayed, falling back to [`FALLBACK_REPLY`].
    pub fn reply_text(&self) -> &str {
        self.suggested_reply.as_deref().unwrap_or(FALLBACK_REPLY)
    }
}

/// How one submission ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// 2xx with a parsable body
    Success(AnalysisResult),
    /// Non-2xx response
    ServerError { status: u16, message: String },
    /// No usable response: transport failure or unparsable body
    NetworkError(String),
}

impl SubmissionOutcome {
    /// Classify the result of a POST to `/analyze`.
    ///
    /// The body is parsed as JSON before the status is inspected, so a
    /// non-JSON or `null` body is a network error whatever the status. A
    /// 2xx body that is valid JSON but not an object yields the fallbacks.
    pub fn from_response(result: Result<Response, HttpError>) -> Self {
        let response = match result {
            Ok(response) => response,
            Err(err) => return SubmissionOutcome::NetworkError(err.to_string()),
        };

        let body: Value = match response.json() {
            Ok(Value::Null) => return SubmissionOutcome::NetworkError(NULL_BODY.to_string()),
            Ok(body) => body,
            Err(err) => return SubmissionOutcome::NetworkError(err.to_string()),
        };

        if response.is_success() {
            if !body.is_object() {
                // Strings, numbers and arrays carry none of the fields
                return SubmissionOutcome::Success(AnalysisResult::default());
            }
            match serde_json::from_value::<AnalysisResult>(body) {
                Ok(result) => SubmissionOutcome::Success(result),
                Err(err) => SubmissionOutcome::NetworkError(err.to_string()),
            }
        } else {
            let message = body
                .get("error")
                .and_then(display_text)
                .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
            SubmissionOutcome::ServerError {
                status: response.status,
                message,
            }
        }
    }

    /// Message for the error panel, or `None` on success.
    pub fn error_message(&self) -> Option<String> {
        match self {
            SubmissionOutcome::Success(_) => None,
            SubmissionOutcome::ServerError { message, .. } => Some(message.clone()),
            SubmissionOutcome::NetworkError(description) => {
                Some(format!("{}{}", CONNECTION_ERROR_PREFIX, description))
            }
        }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SubmissionOutcome::Success(_) => "success",
            SubmissionOutcome::ServerError { .. } => "server_error",
            SubmissionOutcome::NetworkError(_) => "network_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(status: u16, body: &'static str) -> SubmissionOutcome {
        SubmissionOutcome::from_response(Ok(Response::new(status, body)))
    }

    #[test]
    fn test_success_with_category_and_reply() {
        let result = match outcome(
            200,
            r#"{"categoria":"Produtivo","resposta_automatica":"Obrigado pelo contato."}"#,
        ) {
            SubmissionOutcome::Success(result) => result,
            other => panic!("Expected success, got {:?}", other),
        };
        assert_eq!(result.category_text(), "Produtivo");
        assert_eq!(result.reply_text(), "Obrigado pelo contato.");
    }

    #[test]
    fn test_success_empty_body_uses_fallbacks() {
        let SubmissionOutcome::Success(result) = outcome(200, "{}") else {
            panic!("Expected success");
        };
        assert_eq!(result.category_text(), "N/A");
        assert_eq!(result.reply_text(), "Nenhuma resposta sugerida");
        assert!(result.suggested_actions.is_empty());
    }

    #[test]
    fn test_success_empty_strings_use_fallbacks() {
        let SubmissionOutcome::Success(result) =
            outcome(200, r#"{"categoria":"","resposta_automatica":null}"#)
        else {
            panic!("Expected success");
        };
        assert_eq!(result.category_text(), "N/A");
        assert_eq!(result.reply_text(), "Nenhuma resposta sugerida");
    }

    #[test]
    fn test_success_with_extra_fields() {
        let SubmissionOutcome::Success(result) = outcome(
            201,
            r#"{
                "categoria": "PRODUTIVO",
                "confianca": "91.5%",
                "acoes_sugeridas": ["Verificar protocolo", "", "Responder cliente"],
                "metodo_classificacao": "openai",
                "gerado_por": "gpt",
                "justificativa": "Pedido de status"
            }"#,
        ) else {
            panic!("Expected success");
        };
        assert_eq!(result.confidence.as_deref(), Some("91.5%"));
        assert_eq!(
            result.suggested_actions,
            vec!["Verificar protocolo".to_string(), "Responder cliente".to_string()]
        );
        assert_eq!(result.method.as_deref(), Some("openai"));
        assert_eq!(result.generated_by.as_deref(), Some("gpt"));
        assert_eq!(result.reasoning.as_deref(), Some("Pedido de status"));
    }

    #[test]
    fn test_server_error_with_message() {
        let outcome = outcome(400, r#"{"error":"Arquivo inválido"}"#);
        assert_eq!(
            outcome,
            SubmissionOutcome::ServerError {
                status: 400,
                message: "Arquivo inválido".to_string()
            }
        );
        assert_eq!(outcome.error_message().as_deref(), Some("Arquivo inválido"));
    }

    #[test]
    fn test_server_error_without_message() {
        let outcome = outcome(500, "{}");
        assert_eq!(outcome.error_message().as_deref(), Some("Erro desconhecido"));
    }

    #[test]
    fn test_server_error_non_object_body() {
        let outcome = outcome(502, "[]");
        assert_eq!(outcome.error_message().as_deref(), Some("Erro desconhecido"));
    }

    #[test]
    fn test_transport_failure_is_prefixed() {
        let outcome = SubmissionOutcome::from_response(Err(HttpError::ConnectionFailed(
            "Failed to fetch".to_string(),
        )));
        assert_eq!(
            outcome.error_message().as_deref(),
            Some("Erro de conexão: Failed to fetch")
        );
        assert_eq!(outcome.kind(), "network_error");
    }

    #[test]
    fn test_html_body_is_network_error_for_any_status() {
        assert!(matches!(
            outcome(200, "<html></html>"),
            SubmissionOutcome::NetworkError(_)
        ));
        assert!(matches!(
            outcome(500, "<html>Internal Server Error</html>"),
            SubmissionOutcome::NetworkError(_)
        ));
    }

    #[test]
    fn test_null_body_is_network_error_for_any_status() {
        for status in [200, 500] {
            let message = outcome(status, "null").error_message().unwrap();
            assert_eq!(message, "Erro de conexão: resposta vazia do serviço");
        }
    }

    #[test]
    fn test_non_object_success_body_uses_fallbacks() {
        for body in [r#""ok""#, "[]", "42", "true"] {
            let SubmissionOutcome::Success(result) = outcome(200, body) else {
                panic!("Expected success for {}", body);
            };
            assert_eq!(result.category_text(), FALLBACK_CATEGORY);
            assert_eq!(result.reply_text(), FALLBACK_REPLY);
        }
    }

    #[test]
    fn test_success_has_no_error_message() {
        assert_eq!(outcome(200, "{}").error_message(), None);
        assert_eq!(outcome(200, "{}").kind(), "success");
    }
}
