use super::{parse_solutions, SolverService};
use crate::encode::EncodedImage;
use crate::models::Solution;
use crate::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Test double for [`SolverService`].
///
/// Queued responses are raw model response *text*, fed through the same parse
/// path as the real client, so every parse-level failure kind can be
/// exercised without network access.
///
/// Cloning shares the response queue and call counter, so tests can hand the
/// client to an app while keeping a handle for assertions.
#[derive(Clone)]
pub struct MockSolverClient {
    responses: Arc<Mutex<Vec<String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockSolverClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_response_text(self, text: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(text.into());
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockSolverClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SolverService for MockSolverClient {
    async fn solve(&self, _image: &EncodedImage) -> Result<Vec<Solution>> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response: one solved question
            Ok(vec![Solution {
                question: "What is 2+2?".to_string(),
                answer: "4".to_string(),
                explanation: "2+2 equals 4 because addition combines quantities.".to_string(),
            }])
        } else {
            let index = (*count - 1) % responses.len();
            parse_solutions(&responses[index])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn png_image() -> EncodedImage {
        EncodedImage::from_bytes(&[0x89, 0x50, 0x4E, 0x47]).unwrap()
    }

    #[tokio::test]
    async fn test_mock_default_response() {
        let client = MockSolverClient::new();
        let solutions = client.solve(&png_image()).await.unwrap();
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].answer, "4");
    }

    #[tokio::test]
    async fn test_mock_custom_responses_cycle() {
        let client = MockSolverClient::new()
            .with_response_text(r#"[{"question":"Q1","answer":"A1","explanation":"E1"}]"#)
            .with_response_text(r#"[{"question":"Q2","answer":"A2","explanation":"E2"}]"#);

        let first = client.solve(&png_image()).await.unwrap();
        assert_eq!(first[0].question, "Q1");

        let second = client.solve(&png_image()).await.unwrap();
        assert_eq!(second[0].question, "Q2");

        // Should cycle back
        let third = client.solve(&png_image()).await.unwrap();
        assert_eq!(third[0].question, "Q1");
    }

    #[tokio::test]
    async fn test_mock_empty_text_fails_like_real_client() {
        let client = MockSolverClient::new().with_response_text("");
        let err = client.solve(&png_image()).await.unwrap_err();
        assert!(matches!(err, Error::EmptyResponse));
    }

    #[tokio::test]
    async fn test_mock_call_count() {
        let client = MockSolverClient::new();
        assert_eq!(client.get_call_count(), 0);

        client.solve(&png_image()).await.unwrap();
        client.solve(&png_image()).await.unwrap();
        assert_eq!(client.get_call_count(), 2);
    }
}
