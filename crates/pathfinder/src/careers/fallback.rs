use std::collections::BTreeMap;

use super::catalog::CareerCatalog;
use super::domain::CareerDescriptor;
use super::selector::AI_RECOMMENDATION_COUNT;
use super::template::CareerTemplate;
use crate::questionnaire::PersonalityProfile;
use crate::questionnaire::TraitCategory::{self, Business, Creative, Engineering, Science, Social, Tech};

const DOMINANT_SHARE: usize = 3;
const SECONDARY_SHARE: usize = 2;

impl CareerCatalog {
    /// Hand-authored recommendations served when the advisor cannot be reached or
    /// returns something unusable.
    pub fn fallback() -> Self {
        let mut entries: BTreeMap<TraitCategory, Vec<CareerDescriptor>> = BTreeMap::new();
        for template in FALLBACK_CAREERS {
            if let Some(category) = template.personality_types.first() {
                entries
                    .entry(*category)
                    .or_default()
                    .push(template.to_descriptor());
            }
        }
        Self::new(entries)
    }
}

/// Picks exactly five fallback careers: three for the dominant trait, two for the secondary.
///
/// Short lists are filled by cycling through the dominant (first three slots) or secondary
/// careers, falling back to tech careers. Only an entirely empty fallback set yields fewer.
pub fn fallback_recommendations(
    profile: &PersonalityProfile,
    fallback: &CareerCatalog,
) -> Vec<CareerDescriptor> {
    let dominant = fallback.careers_for(profile.dominant_type);
    let secondary = fallback.careers_for(profile.secondary_type);
    let mut recommendations: Vec<CareerDescriptor> = Vec::new();

    if dominant.len() >= DOMINANT_SHARE {
        recommendations.extend_from_slice(&dominant[..DOMINANT_SHARE]);
    }
    if secondary.len() >= SECONDARY_SHARE {
        recommendations.extend_from_slice(&secondary[..SECONDARY_SHARE]);
    }

    while recommendations.len() < AI_RECOMMENDATION_COUNT {
        let filler = if recommendations.len() < DOMINANT_SHARE {
            dominant
        } else {
            secondary
        };
        let available = if filler.is_empty() {
            fallback.careers_for(TraitCategory::Tech)
        } else {
            filler
        };
        if available.is_empty() {
            break;
        }
        let next = available[recommendations.len() % available.len()].clone();
        recommendations.push(next);
    }

    recommendations.truncate(AI_RECOMMENDATION_COUNT);
    recommendations
}

/// Insight sentence paired with fallback recommendations.
pub fn fallback_insight(profile: &PersonalityProfile) -> String {
    format!(
        "Based on your answers, you show a strong preference for {}-related activities with secondary interests in {}-related fields.",
        profile.dominant_type, profile.secondary_type
    )
}

const FALLBACK_CAREERS: &[CareerTemplate] = &[
    CareerTemplate {
        title: "Full-Stack Developer",
        description: "Designs and builds complete web applications, handling both user interfaces and server-side functionality.",
        skills: &["JavaScript/TypeScript", "React/Angular/Vue", "Node.js", "Database management", "API development"],
        education: &["Computer Science degree", "Coding bootcamp", "Self-taught with portfolio"],
        roles: &["Frontend Developer", "Backend Engineer", "DevOps Specialist"],
        growth_potential: None,
        salary_range: None,
        personality_types: &[Tech],
        fit_reason: Some("Based on your tech-oriented answers, you would excel in creating digital solutions and solving complex technical challenges."),
    },
    CareerTemplate {
        title: "Data Scientist",
        description: "Analyzes complex data sets to identify patterns and build predictive models that drive business decisions.",
        skills: &["Python/R", "Statistical analysis", "Machine learning", "Data visualization", "SQL"],
        education: &["Computer Science or Statistics degree", "Data Science bootcamp", "Advanced degree in related field"],
        roles: &["Machine Learning Engineer", "AI Researcher", "Data Analyst"],
        growth_potential: None,
        salary_range: None,
        personality_types: &[Tech],
        fit_reason: Some("Your analytical mindset and technical interests align perfectly with extracting insights from complex data."),
    },
    CareerTemplate {
        title: "Cybersecurity Analyst",
        description: "Protects computer systems and networks from information disclosure, theft, or damage to hardware, software, or data.",
        skills: &["Network security", "Threat detection", "Security protocols", "Ethical hacking", "Risk assessment"],
        education: &["Computer Science degree", "Cybersecurity certifications", "Specialized training"],
        roles: &["Security Engineer", "Penetration Tester", "Security Consultant"],
        growth_potential: None,
        salary_range: None,
        personality_types: &[Tech],
        fit_reason: Some("Your technical aptitude and analytical thinking would be valuable in protecting systems from security threats."),
    },
    CareerTemplate {
        title: "Robotics Engineer",
        description: "Designs, builds, and maintains robotic systems and automated equipment for various applications.",
        skills: &["Mechanical design", "Programming", "Electronics", "Control systems", "Problem-solving"],
        education: &["Mechanical/Electrical Engineering degree", "Robotics specialization", "Technical certifications"],
        roles: &["Automation Specialist", "Control Systems Engineer", "Robot Programmer"],
        growth_potential: None,
        salary_range: None,
        personality_types: &[Engineering],
        fit_reason: Some("Your engineering mindset and interest in building systems would be perfect for creating robotic solutions."),
    },
    CareerTemplate {
        title: "Aerospace Engineer",
        description: "Designs aircraft, spacecraft, satellites, and missiles, as well as testing prototypes to ensure they function according to design.",
        skills: &["Aerodynamics", "Propulsion", "Materials science", "CAD software", "Analytical thinking"],
        education: &["Aerospace Engineering degree", "Advanced degree in specialized area", "Professional certifications"],
        roles: &["Propulsion Engineer", "Structural Analyst", "Systems Engineer"],
        growth_potential: None,
        salary_range: None,
        personality_types: &[Engineering],
        fit_reason: Some("Your engineering aptitude and systematic approach to problem-solving align well with aerospace challenges."),
    },
    CareerTemplate {
        title: "Mechanical Engineer",
        description: "Designs, develops, and tests mechanical devices, components, and systems for various applications.",
        skills: &["CAD software", "Thermodynamics", "Material science", "Problem-solving", "Technical drawing"],
        education: &["Mechanical Engineering degree", "Professional Engineer (PE) license", "Specialized certifications"],
        roles: &["Product Designer", "Manufacturing Engineer", "Thermal Systems Specialist"],
        growth_potential: None,
        salary_range: None,
        personality_types: &[Engineering],
        fit_reason: Some("Your answers show strong engineering tendencies and interest in how things work physically."),
    },
    CareerTemplate {
        title: "Biochemist",
        description: "Studies the chemical processes and substances that occur in living organisms to develop new products and solve problems.",
        skills: &["Laboratory techniques", "Data analysis", "Research methodology", "Critical thinking", "Technical writing"],
        education: &["Biochemistry degree", "Advanced degree (MS/PhD)", "Laboratory certifications"],
        roles: &["Research Scientist", "Laboratory Manager", "Pharmaceutical Developer"],
        growth_potential: None,
        salary_range: None,
        personality_types: &[Science],
        fit_reason: Some("Your scientific curiosity and analytical approach would be valuable in biochemical research and development."),
    },
    CareerTemplate {
        title: "Environmental Scientist",
        description: "Studies, develops, and implements solutions to environmental problems and works to protect natural resources.",
        skills: &["Field research", "Data collection", "Environmental regulations", "GIS mapping", "Scientific writing"],
        education: &["Environmental Science degree", "Specialized certifications", "Advanced degree in related field"],
        roles: &["Conservation Specialist", "Environmental Analyst", "Sustainability Consultant"],
        growth_potential: None,
        salary_range: None,
        personality_types: &[Science],
        fit_reason: Some("Your scientific mindset and analytical skills would help address important environmental challenges."),
    },
    CareerTemplate {
        title: "Astrophysicist",
        description: "Studies the physics of the universe, including stars, planets, galaxies, and the fundamental laws that govern them.",
        skills: &["Advanced mathematics", "Computer modeling", "Data analysis", "Research methodology", "Critical thinking"],
        education: &["Physics degree", "PhD in Astrophysics", "Advanced mathematics training"],
        roles: &["Research Scientist", "Observatory Specialist", "Data Analyst"],
        growth_potential: None,
        salary_range: None,
        personality_types: &[Science],
        fit_reason: Some("Your scientific curiosity and analytical abilities would be well-suited to exploring the cosmos."),
    },
    CareerTemplate {
        title: "Financial Analyst",
        description: "Analyzes financial data to guide investment decisions and provide recommendations for individuals or organizations.",
        skills: &["Financial modeling", "Data analysis", "Market research", "Excel/financial software", "Critical thinking"],
        education: &["Finance or Economics degree", "MBA", "CFA certification"],
        roles: &["Investment Analyst", "Risk Assessment Specialist", "Portfolio Manager"],
        growth_potential: None,
        salary_range: None,
        personality_types: &[Business],
        fit_reason: Some("Your business acumen and analytical abilities would excel in making data-driven financial decisions."),
    },
    CareerTemplate {
        title: "Marketing Manager",
        description: "Develops and implements marketing strategies to promote products or services and drive business growth.",
        skills: &["Strategic planning", "Campaign management", "Market analysis", "Communication", "Creative thinking"],
        education: &["Marketing or Business degree", "MBA", "Digital marketing certifications"],
        roles: &["Brand Strategist", "Digital Marketing Specialist", "Market Research Analyst"],
        growth_potential: None,
        salary_range: None,
        personality_types: &[Business],
        fit_reason: Some("Your business orientation and strategic thinking would be valuable in developing effective marketing campaigns."),
    },
    CareerTemplate {
        title: "Management Consultant",
        description: "Helps organizations improve performance through analysis of existing problems and development of plans for improvement.",
        skills: &["Problem-solving", "Business analysis", "Project management", "Communication", "Strategic thinking"],
        education: &["Business degree", "MBA", "Management consulting certifications"],
        roles: &["Strategy Consultant", "Operations Analyst", "Business Transformation Specialist"],
        growth_potential: None,
        salary_range: None,
        personality_types: &[Business],
        fit_reason: Some("Your business mindset and analytical approach would help organizations solve complex problems."),
    },
    CareerTemplate {
        title: "UX/UI Designer",
        description: "Creates intuitive, accessible, and visually appealing digital interfaces that enhance user experience.",
        skills: &["User research", "Wireframing", "Prototyping", "Visual design", "Usability testing"],
        education: &["Design degree", "UX certification", "Strong portfolio"],
        roles: &["Interaction Designer", "User Researcher", "Visual Designer"],
        growth_potential: None,
        salary_range: None,
        personality_types: &[Creative],
        fit_reason: Some("Your creative thinking and interest in combining aesthetics with functionality would create exceptional user experiences."),
    },
    CareerTemplate {
        title: "Game Designer",
        description: "Creates concepts, rules, and content for video games, focusing on player experience and engagement.",
        skills: &["Game mechanics", "Storytelling", "Prototyping", "User psychology", "Creative problem-solving"],
        education: &["Game Design degree", "Computer Science with game focus", "Strong portfolio"],
        roles: &["Level Designer", "Narrative Designer", "Gameplay Programmer"],
        growth_potential: None,
        salary_range: None,
        personality_types: &[Creative],
        fit_reason: Some("Your creative mindset and interest in interactive experiences would be perfect for game design."),
    },
    CareerTemplate {
        title: "Art Director",
        description: "Oversees the visual style and creative elements of projects in advertising, publishing, film, or other media.",
        skills: &["Visual design", "Creative direction", "Team leadership", "Brand strategy", "Project management"],
        education: &["Fine Arts or Design degree", "Extensive portfolio", "Industry experience"],
        roles: &["Creative Director", "Brand Designer", "Visual Communications Manager"],
        growth_potential: None,
        salary_range: None,
        personality_types: &[Creative],
        fit_reason: Some("Your creative vision and aesthetic sensibilities would be valuable in directing visual projects."),
    },
    CareerTemplate {
        title: "Clinical Psychologist",
        description: "Assesses and treats mental, emotional, and behavioral disorders through various therapeutic approaches.",
        skills: &["Active listening", "Empathy", "Assessment techniques", "Treatment planning", "Research methodology"],
        education: &["Psychology degree", "PhD in Clinical Psychology", "State licensure"],
        roles: &["Therapist", "Counselor", "Mental Health Researcher"],
        growth_potential: None,
        salary_range: None,
        personality_types: &[Social],
        fit_reason: Some("Your empathetic nature and interest in understanding human behavior would help others overcome challenges."),
    },
    CareerTemplate {
        title: "Human Resources Manager",
        description: "Oversees the administrative functions of an organization, focusing on recruiting, employee development, and workplace culture.",
        skills: &["Interpersonal communication", "Conflict resolution", "Organizational development", "Policy implementation", "Employee advocacy"],
        education: &["Human Resources degree", "Business with HR focus", "HR certifications"],
        roles: &["Talent Acquisition Specialist", "Employee Relations Manager", "Training Coordinator"],
        growth_potential: None,
        salary_range: None,
        personality_types: &[Social],
        fit_reason: Some("Your people-oriented approach and communication skills would excel in managing human capital."),
    },
    CareerTemplate {
        title: "Healthcare Administrator",
        description: "Manages healthcare facilities, services, and staff to ensure efficient operations and quality patient care.",
        skills: &["Leadership", "Healthcare regulations", "Staff management", "Budget planning", "Quality improvement"],
        education: &["Healthcare Administration degree", "Business with healthcare focus", "Industry certifications"],
        roles: &["Medical Practice Manager", "Health Services Coordinator", "Patient Care Director"],
        growth_potential: None,
        salary_range: None,
        personality_types: &[Social],
        fit_reason: Some("Your social orientation and organizational skills would be valuable in healthcare management."),
    },
];
