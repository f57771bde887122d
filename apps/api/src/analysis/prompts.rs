// All LLM prompt constants for the analysis gateway.
// Reuses cross-cutting fragments from llm_client::prompts.
// Placeholders in `{braces}` are replaced before sending.

/// Document audit prompt. Sent after the inline files.
pub const COMPLIANCE_PROMPT: &str = r#"You are the Intelligent Compliance Engine. Audit the candidate documents provided
(National ID, LC1 letters, academic transcripts, professional certificates, CVs).

First, determine the most likely sector from the documents, then apply that sector's rules:

1. Oil & Gas (PAU standards):
   - Verify district of origin for host-community status (Hoima, Buliisa, Nwoya).
   - Check for OPITO / NEBOSH / TUV certifications.
2. Banking (Bank of Uganda):
   - Look for 'Fit and Proper' indicators.
   - Verify CPA / ACCA certifications.
   - Flag any fraud indicators in the documents.
3. Telecom & Engineering (UCC / ERB):
   - Verify Engineers Registration Board registration or UIPE membership.
   - Check telecom-specific technical certificates.
4. Agriculture (MAAIF):
   - Verify agricultural qualifications and commercial farming/processing experience.
5. General:
   - Cross-reference ID details with the other documents (integrity score 0-100).
   - List required documents that are missing or illegible.
   - Report the detected sector in sectorCompliance.
{identity_check}
Return the analysis in strict JSON."#;

/// Inserted into `{identity_check}` when a selfie accompanies the documents.
pub const IDENTITY_CHECK_SECTION: &str = r#"
6. Identity verification:
   - One image is a selfie of the candidate holding their ID card.
   - Compare the face in the selfie with the photo on the identity document.
   - Populate identityVerification with isMatch, confidence (0-100) and reason.
"#;

/// OSINT prompt. The search tool is enabled for this call.
pub const OSINT_PROMPT: &str = r#"Conduct an open-source intelligence investigation on: {name}.
Context extracted from the candidate's file: {context}

Use web search. Only report what you actually find; never invent cases, people or URLs.

TASK 1: CRIMINAL & SANCTIONS CHECK
- Search public court records, police notices, Interpol red notices, AML watchlists and sanctions lists.
- Summarise what was checked in criminalDetails. If nothing is found, say
  "No negative matches found in global or local criminal databases."
- criminalRecordMatch is true only when a record clearly refers to this person.
- criminalRecords lists each matched case (caseId, offense, date, court,
  status one of Convicted|Acquitted|Pending|Wanted|Closed). It MUST be empty when
  criminalRecordMatch is false.

TASK 2: DIGITAL FOOTPRINT & LIFESTYLE
- digitalFootprintScore: 0-100 online visibility.
- lifestyleAnalysis: behaviour inconsistent with corporate values, lifestyle vs reported role.
- familyBackground: family ties or political exposure (PEP).
- socialMediaSentiment: POSITIVE | NEUTRAL | NEGATIVE.
- redFlags: list of concerns (may be empty).

TASK 3: BRAND IMPROVEMENT
- improvementTips: 3-4 specific, actionable tips for the candidate's professional online brand.

Return a JSON object with exactly these fields:
criminalRecordMatch, criminalDetails, criminalRecords, digitalFootprintScore,
lifestyleAnalysis, familyBackground, socialMediaSentiment, redFlags, improvementTips."#;

/// Job match prompt. Sent after the inline files.
pub const JOB_MATCH_PROMPT: &str = r#"Act as a Senior Recruitment & Compliance Officer.

TARGET JOB:
Title: {title}
Company: {company}
Location: {location}
Description: {description}
Required Skills: {skills}

Analyse the candidate documents and calculate a fit score.

SCORING ALGORITHM (CRITICAL):
1. EXPERIENCE (40% weight)
   - Extract total years of relevant experience (candidateYearsExperience) and the
     years the job requires (requiredYearsExperience).
   - Less experience than the job level implies -> deduct heavily.
   - Junior applying for senior -> experience component below 10/40.
   - experienceAnalysis must name the gap, e.g. "Job requires 5 years, candidate has 2. Severe gap."
2. LOCATION & MOBILITY (30% weight)
   - Compare the candidate's residence with the job location.
   - Different locations and no mention of relocation -> deduct 20 points.
   - Different region (e.g. Kampala vs Hoima) -> flag in locationAnalysis.
   - Host-community origin is a plus for Oil & Gas.
3. SKILLS & CERTIFICATIONS (30% weight)
   - Keyword match on technical skills and mandatory certificates (NEBOSH, CPA, ...).

reason: a professional summary that references the experience and location weightings."#;

pub const SOURCING_PROMPT: &str = r#"You are a talent sourcing specialist.

JOB:
Title: {title}
Company: {company}
Location: {location}
Description: {description}
Required Skills: {skills}

1. Write a LinkedIn/Google X-ray Boolean search string (searchString) that finds
   candidates for this job in Uganda.
2. Explain the strategy behind it (explanation).
3. Provide 3-5 illustrative candidate profiles (simulatedMatches) showing the kind
   of person the search should surface: name, headline, currentRole,
   matchExplanation, profileUrl."#;

pub const PROFILE_PARSE_PROMPT: &str = r#"The following text is a candidate profile (LinkedIn export, CV text or
recruiter notes). Extract a compliance report from it.

- candidateName, districtOfOrigin (use "Unknown" when absent).
- isHostCommunity: true only when the district is a designated host community
  for the candidate's sector (e.g. Hoima, Buliisa, Nwoya for Oil & Gas).
- certificationsValid: whether the stated certifications look credible.
- integrityScore 0-100 for internal consistency of the profile.
- riskAssessment with level LOW|MEDIUM|HIGH|CRITICAL and a reason.
- auditNotes summarising the profile against sector regulations.
- missingDocuments: documents still needed for full vetting (ID, LC1 letter, certificates).

PROFILE TEXT:
{text}"#;

/// Prepended to every chat as a user/model exchange.
pub const ASSISTANT_PREAMBLE: &str = "You are the ETI Assistant for Salus International & HRBL. \
    Assist HR with compliance/OSINT and candidates with career branding.";

pub const ASSISTANT_ACK: &str = "Understood. I am ready to assist.";

/// Returned when the model answers a chat turn with no text.
pub const ASSISTANT_FALLBACK_REPLY: &str = "I'm sorry, I couldn't process that.";
