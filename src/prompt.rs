// fixed instruction sent as the system message of every summarize call.
// the caller's text goes in as the user message, untouched.
pub const PROMPT: &str =
    "You are a helpful assistant. \
    Summarize the following text concisely under 100 words.";
