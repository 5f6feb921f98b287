//! Instruction text for both collaborator calls: the extraction
//! instruction and the chat grounding built from an analysis result.

use crate::models::AnalysisResult;

/// Fixed instruction accompanying every extraction request.
pub const EXTRACTION_INSTRUCTION: &str = "\
You are an expert medical analyst AI. Analyze the attached medical report image.

1. Extract the Test Name, Measured Value, Unit, and Reference Range for each visible test.
2. Normalize the values to numbers. If a value is \"Not Detected\", treat it as 0 or appropriate.
3. Determine the status (Normal, Low, High) based strictly on the visible reference range.
4. Group tests into categories (e.g., \"Hematology\", \"Lipids\", \"Metabolic\").
5. When analyzing the results, look for correlations. For example, if both 'Ferritin' and 'Hemoglobin' are low, suggest 'Anemia' as a potential discussion topic for the doctor.
6. Generate a plain-language summary of the health status.
7. Formulate 3 specific, high-quality questions for the doctor based on these results.

CRITICAL:
- If the image is blurry, unreadable, or not a medical report, return an empty metrics array and a summary stating the error.
- Do NOT hallucinate values. Only use what is visible.
- For the insights, look for medical patterns in the data.";

/// Build the chat system instruction, grounding the session with the
/// full result serialized as pretty JSON.
pub fn chat_system_instruction(result: &AnalysisResult) -> String {
    let context = serde_json::to_string_pretty(result)
        .unwrap_or_else(|_| "{}".to_string());

    format!(
        "\
You are ClearHealth, a helpful and empathetic medical AI assistant.
You have been provided with the user's medical test results below.

CONTEXT DATA:
{context}

INSTRUCTIONS:
1. Answer the user's questions specifically referencing their data (e.g., \"Your Vitamin D is 18, which is low...\").
2. Explain complex medical terms in simple, everyday language.
3. If the user asks for diet or lifestyle advice, provide general, evidence-based suggestions relevant to their specific out-of-range metrics.
4. ALWAYS maintain a professional and reassuring tone.
5. DISCLAIMER: You are NOT a doctor. Do not provide a diagnosis. Always recommend consulting a healthcare provider for medical decisions.
6. Keep answers concise (max 3-4 sentences) unless a detailed explanation is requested."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExtractedMetric, TestStatus};

    #[test]
    fn extraction_instruction_guards_against_hallucination() {
        assert!(EXTRACTION_INSTRUCTION.contains("Do NOT hallucinate"));
        assert!(EXTRACTION_INSTRUCTION.contains("empty metrics array"));
        assert!(EXTRACTION_INSTRUCTION.contains("Reference Range"));
    }

    #[test]
    fn chat_instruction_embeds_result_and_boundaries() {
        let result = AnalysisResult {
            metrics: vec![ExtractedMetric {
                test_name: "Vitamin D".to_string(),
                value: 18.0,
                unit: "ng/mL".to_string(),
                range_min: Some(30.0),
                range_max: Some(100.0),
                status: TestStatus::Low,
                category: "Vitamins".to_string(),
            }],
            summary: "Low vitamin D.".to_string(),
            insights: vec![],
            doctor_questions: vec![],
        };

        let instruction = chat_system_instruction(&result);
        assert!(instruction.contains("Vitamin D"));
        assert!(instruction.contains("\"value\": 18.0"));
        assert!(instruction.contains("NOT a doctor"));
        assert!(instruction.contains("CONTEXT DATA"));
    }
}
