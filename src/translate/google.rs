//! Google Translate client using the public `client=gtx` endpoint

use super::traits::*;
use crate::config::TranslatorSettings;
use crate::network::HttpClient;
use async_trait::async_trait;
use tracing::debug;

/// Google Translate backed translator
pub struct GoogleTranslator {
    client: HttpClient,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new(client: HttpClient, settings: &TranslatorSettings) -> Self {
        Self {
            client,
            endpoint: settings.endpoint.clone(),
        }
    }

    /// Parse the nested-array payload: `[[["out","in",..],..], null, "detected", ..]`
    fn parse(body: &str) -> Result<Translation, TranslateError> {
        let json: serde_json::Value = serde_json::from_str(body)
            .map_err(|e| TranslateError::Malformed(format!("invalid JSON: {}", e)))?;

        let segments = json
            .get(0)
            .and_then(|s| s.as_array())
            .ok_or_else(|| TranslateError::Malformed("missing sentence list".to_string()))?;

        let text: String = segments
            .iter()
            .filter_map(|segment| segment.get(0).and_then(|t| t.as_str()))
            .collect();

        if text.is_empty() {
            return Err(TranslateError::Malformed(
                "no translated sentences".to_string(),
            ));
        }

        let detected_source = json
            .get(2)
            .and_then(|d| d.as_str())
            .filter(|d| !d.is_empty())
            .map(|d| d.to_string());

        Ok(Translation {
            text,
            detected_source,
        })
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    fn name(&self) -> &str {
        "google"
    }

    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<Translation, TranslateError> {
        if text.trim().is_empty() {
            return Ok(Translation::unchanged(text));
        }

        let params = [
            ("client", "gtx"),
            ("sl", source),
            ("tl", target),
            ("dt", "t"),
            ("q", text),
        ];

        let response = self
            .client
            .get_with_params(&self.endpoint, &params)
            .await
            .map_err(|e| TranslateError::Request(e.to_string()))?;

        if !response.is_success() {
            return Err(TranslateError::Status(response.status));
        }

        let translation = Self::parse(&response.text)?;
        debug!(
            "Translated {} -> {} (detected {:?})",
            source, target, translation.detected_source
        );
        Ok(translation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn translator(server: &MockServer) -> GoogleTranslator {
        let settings = TranslatorSettings {
            endpoint: format!("{}/translate_a/single", server.uri()),
        };
        GoogleTranslator::new(HttpClient::new().unwrap(), &settings)
    }

    #[test]
    fn test_parse_joins_sentences() {
        let body = r#"[[["Show internships. ","Muestra pasantías. ",null,null,10],["Cheap ones.","Las baratas.",null,null,10]],null,"es"]"#;
        let translation = GoogleTranslator::parse(body).unwrap();

        assert_eq!(translation.text, "Show internships. Cheap ones.");
        assert_eq!(translation.detected_source.as_deref(), Some("es"));
    }

    #[test]
    fn test_parse_rejects_unexpected_shape() {
        assert!(matches!(
            GoogleTranslator::parse(r#"{"error": "nope"}"#),
            Err(TranslateError::Malformed(_))
        ));
        assert!(matches!(
            GoogleTranslator::parse("not json"),
            Err(TranslateError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn test_translate_to_english() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/translate_a/single"))
            .and(query_param("sl", "auto"))
            .and(query_param("tl", "en"))
            .and(query_param("q", "इंटर्नशिप दिखाओ"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[[["Show internships","इंटर्नशिप दिखाओ",null,null,10]],null,"hi"]"#,
            ))
            .mount(&server)
            .await;

        let translation = translator(&server)
            .translate("इंटर्नशिप दिखाओ", AUTO, ENGLISH)
            .await
            .unwrap();

        assert_eq!(translation.text, "Show internships");
        assert_eq!(translation.detected_source.as_deref(), Some("hi"));
    }

    #[tokio::test]
    async fn test_http_error_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = translator(&server)
            .translate("hola", AUTO, ENGLISH)
            .await
            .unwrap_err();

        assert!(matches!(err, TranslateError::Status(503)));
        assert_eq!(err.to_string(), "translation service returned HTTP 503");
    }

    #[tokio::test]
    async fn test_blank_text_skips_the_service() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let translation = translator(&server)
            .translate("   ", AUTO, ENGLISH)
            .await
            .unwrap();

        assert_eq!(translation, Translation::unchanged("   "));
    }
}
