pub mod openai {
    pub const API_BASE: &str = "https://api.openai.com/v1";
    pub const CHAT_COMPLETIONS_ENDPOINT: &str = "/chat/completions";
    pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";
    pub const BASE_URL_ENV_VAR: &str = "OPENAI_BASE_URL";
    pub const ORGANIZATION_ENV_VAR: &str = "OPENAI_ORGANIZATION";
    pub const ORGANIZATION_HEADER: &str = "OpenAI-Organization";
}
