/// Upper bound on tokens the model may add after the prompt.
pub const MAX_NEW_TOKENS: u32 = 50;

/// Sampling knobs sent with every generation.
///
/// These mirror the text-generation pipeline options the app was built
/// around. They are fixed for the lifetime of a session; `Default` is the
/// only constructor the app uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationParams {
    pub max_new_tokens: u32,
    /// Stochastic sampling when true, greedy decoding when false.
    pub do_sample: bool,
    /// Prefix the prompt to the continuation, like a text-generation pipeline does.
    pub return_full_text: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_new_tokens: MAX_NEW_TOKENS,
            do_sample: true,
            return_full_text: true,
        }
    }
}

impl GenerationParams {
    /// Temperature used on the wire. Sampling uses the model's natural
    /// distribution, greedy pins it to zero.
    pub fn temperature(&self) -> f32 {
        if self.do_sample { 1.0 } else { 0.0 }
    }
}

/// Everything a generator needs to fulfill one request.
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    pub prompt: &'a str,
    pub model: &'a str,
    pub params: GenerationParams,
}

impl<'a> GenerationRequest<'a> {
    pub fn new(prompt: &'a str, model: &'a str) -> Self {
        Self {
            prompt,
            model,
            params: GenerationParams::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_match_pipeline_settings() {
        let params = GenerationParams::default();
        assert_eq!(params.max_new_tokens, 50);
        assert!(params.do_sample);
        assert!(params.return_full_text);
    }

    #[test]
    fn test_temperature_follows_sampling_flag() {
        let mut params = GenerationParams::default();
        assert_eq!(params.temperature(), 1.0);
        params.do_sample = false;
        assert_eq!(params.temperature(), 0.0);
    }

    #[test]
    fn test_request_new_uses_default_params() {
        let request = GenerationRequest::new("Explain entropy", "distilgpt2");
        assert_eq!(request.prompt, "Explain entropy");
        assert_eq!(request.model, "distilgpt2");
        assert_eq!(request.params, GenerationParams::default());
    }
}
