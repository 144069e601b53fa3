use crate::careers::AI_RECOMMENDATION_COUNT;
use crate::questionnaire::domain::resolve_answer;
use crate::questionnaire::{AnswerMap, PersonalityProfile, Question, TraitCategory};

/// Renders the recommendation request sent to the text-generation backend.
pub fn build_prompt(
    answers: &AnswerMap,
    questions: &[Question],
    profile: &PersonalityProfile,
) -> String {
    let dominant = profile.dominant_type;
    let secondary = profile.secondary_type;
    let count = AI_RECOMMENDATION_COUNT;

    let mut prompt = format!(
        "Based on the following questionnaire responses and personality analysis, suggest EXACTLY {count} specific career paths that would be most suitable for this individual:\n\n"
    );

    prompt.push_str("Personality Analysis:\n");
    prompt.push_str(&format!(
        "- Dominant personality type: {dominant} ({}%)\n",
        profile.percentage(dominant)
    ));
    prompt.push_str(&format!(
        "- Secondary personality type: {secondary} ({}%)\n",
        profile.percentage(secondary)
    ));
    let others: Vec<String> = TraitCategory::ordered()
        .into_iter()
        .filter(|category| *category != dominant && *category != secondary)
        .map(|category| format!("{category} ({}%)", profile.percentage(category)))
        .collect();
    prompt.push_str(&format!("- Other traits: {}\n\n", others.join(", ")));

    prompt.push_str("Personality Type Descriptions:\n");
    for category in TraitCategory::ordered() {
        prompt.push_str(&format!("- {category}: {}\n", category.prompt_hint()));
    }
    prompt.push('\n');

    for (question_id, option_id) in answers {
        let Some((question, option)) = resolve_answer(questions, *question_id, option_id) else {
            continue;
        };
        let trait_label = option
            .trait_category
            .map(|category| category.key())
            .unwrap_or("untyped");
        prompt.push_str(&format!("Question: {}\n", question.text));
        prompt.push_str(&format!("Answer: {} (Type: {trait_label})\n\n", option.text));
    }

    prompt.push_str(&format!(
        "Based on the above personality analysis, please recommend EXACTLY {count} SPECIFIC career paths that align with the user's dominant and secondary personality types. These should be specific job titles (like 'Full-Stack Developer', 'Financial Analyst', 'Mechanical Engineer', etc.) rather than broad categories. For each recommendation, include:\n"
    ));
    prompt.push_str(RECOMMENDATION_CHECKLIST);
    prompt.push_str(RESPONSE_SHAPE);
    prompt.push_str(&format!(
        "\n\nIMPORTANT INSTRUCTIONS:\n1. You MUST provide EXACTLY {count} SPECIFIC career recommendations in the 'recommendations' array.\n"
    ));
    prompt.push_str("2. Each recommendation MUST align with either the dominant or secondary personality type.\n");
    prompt.push_str("3. At least 3 recommendations should align with the dominant personality type.\n");
    prompt.push_str("4. Do not use broad categories - use specific job titles.\n");
    for (index, category) in TraitCategory::ordered().into_iter().enumerate() {
        prompt.push_str(&format!(
            "{}. For {category} personality: focus on {}.\n",
            index + 5,
            category.focus_areas()
        ));
    }

    prompt
}

const RECOMMENDATION_CHECKLIST: &str = "\
1. Specific career title (e.g., 'Data Scientist' not 'Technology')
2. Related roles or specializations within that career
3. Brief description of what the job entails
4. Key skills needed for success in this career
5. Typical education requirements
6. Why this specific career matches their profile

";

const RESPONSE_SHAPE: &str = r#"Format your response in JSON with the following structure:
{
  "personalityInsight": "Overall analysis of their personality and aptitudes",
  "topFields": ["Specific Career 1", "Specific Career 2", "Specific Career 3", "Specific Career 4", "Specific Career 5"],
  "recommendations": [
    {
      "field": "Specific Career Title",
      "roles": ["Related Role 1", "Related Role 2", "Related Role 3"],
      "description": "Brief description of what this job entails",
      "skills": ["Specific Skill 1", "Specific Skill 2", "Specific Skill 3"],
      "education": ["Education 1", "Education 2"],
      "fitReason": "Why this specific career matches their profile"
    }
  ]
}"#;
