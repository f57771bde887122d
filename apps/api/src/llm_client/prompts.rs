// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Appended to prompts whose output is not constrained by a response schema.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Who the model is speaking for in every prompt.
pub const ORGANISATION_PREAMBLE: &str = "\
    You work for Equatorial Talent Intelligence (ETI), a joint venture between \
    Salus International and HRBL that vets and places personnel for the Ugandan \
    market: Oil & Gas, Banking, Telecom, Engineering and Agriculture.";
