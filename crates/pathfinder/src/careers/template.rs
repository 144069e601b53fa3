use super::domain::CareerDescriptor;
use crate::questionnaire::TraitCategory;

/// Static career data compiled into the binary.
pub(crate) struct CareerTemplate {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) skills: &'static [&'static str],
    pub(crate) education: &'static [&'static str],
    pub(crate) roles: &'static [&'static str],
    pub(crate) growth_potential: Option<&'static str>,
    pub(crate) salary_range: Option<&'static str>,
    pub(crate) personality_types: &'static [TraitCategory],
    pub(crate) fit_reason: Option<&'static str>,
}

impl CareerTemplate {
    pub(crate) fn to_descriptor(&self) -> CareerDescriptor {
        CareerDescriptor {
            title: self.title.to_string(),
            description: self.description.to_string(),
            skills: to_strings(self.skills),
            education: to_strings(self.education),
            roles: to_strings(self.roles),
            personality_types: self.personality_types.iter().copied().collect(),
            growth_potential: self.growth_potential.map(str::to_string),
            salary_range: self.salary_range.map(str::to_string),
            fit_reason: self.fit_reason.map(str::to_string),
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
