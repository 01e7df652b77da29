// Shared prompt fragments. Each service that calls the LLM keeps its own
// prompts.rs alongside it and composes these.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Instruction that keeps extracted spans verbatim.
pub const VERBATIM_INSTRUCTION: &str = "\
    CRITICAL: Copy every span exactly as it appears in the input text. \
    Do NOT normalise casing, expand abbreviations, or invent text that is not present.";
