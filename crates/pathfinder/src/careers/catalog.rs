use std::collections::BTreeMap;

use super::domain::CareerDescriptor;
use super::template::CareerTemplate;
use crate::questionnaire::TraitCategory::{self, Business, Creative, Engineering, Science, Social, Tech};

/// Immutable trait → careers mapping consulted by the recommendation selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareerCatalog {
    entries: BTreeMap<TraitCategory, Vec<CareerDescriptor>>,
}

impl CareerCatalog {
    pub fn new(entries: BTreeMap<TraitCategory, Vec<CareerDescriptor>>) -> Self {
        Self { entries }
    }

    pub fn standard() -> Self {
        let mut entries: BTreeMap<TraitCategory, Vec<CareerDescriptor>> = BTreeMap::new();
        for (category, template) in STANDARD_CAREERS {
            entries
                .entry(*category)
                .or_default()
                .push(template.to_descriptor());
        }
        Self { entries }
    }

    /// Careers listed under a trait, in catalog order. Empty when the trait has none.
    pub fn careers_for(&self, category: TraitCategory) -> &[CareerDescriptor] {
        self.entries
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

const STANDARD_CAREERS: &[(TraitCategory, CareerTemplate)] = &[
    (
        Tech,
        CareerTemplate {
            title: "Software Engineer",
            description: "Design, develop, and maintain software applications and systems using programming languages and development tools.",
            skills: &["Programming", "Problem-solving", "Debugging", "Software architecture", "Version control"],
            education: &["Computer Science degree", "Coding bootcamp", "Self-taught with portfolio"],
            roles: &["Tech companies", "Finance", "Healthcare", "E-commerce", "Gaming"],
            growth_potential: Some("High demand with continuous growth opportunities and specialization paths"),
            salary_range: Some("$70,000 - $150,000+"),
            personality_types: &[Tech, Engineering],
            fit_reason: None,
        },
    ),
    (
        Tech,
        CareerTemplate {
            title: "Data Scientist",
            description: "Analyze and interpret complex data to help organizations make better decisions using statistical methods and machine learning.",
            skills: &["Statistics", "Machine learning", "Data visualization", "Programming (Python/R)", "Domain expertise"],
            education: &["Statistics/Math degree", "Computer Science", "Specialized bootcamps"],
            roles: &["Tech", "Finance", "Healthcare", "Retail", "Government"],
            growth_potential: Some("Rapidly growing field with increasing demand across industries"),
            salary_range: Some("$80,000 - $160,000+"),
            personality_types: &[Tech, Science],
            fit_reason: None,
        },
    ),
    (
        Tech,
        CareerTemplate {
            title: "Cybersecurity Specialist",
            description: "Protect computer systems and networks from information disclosure, theft, and damage to hardware, software, or data.",
            skills: &["Network security", "Ethical hacking", "Risk assessment", "Security protocols", "Incident response"],
            education: &["Computer Science", "Cybersecurity degree", "Professional certifications"],
            roles: &["Government", "Finance", "Healthcare", "Tech", "Defense"],
            growth_potential: Some("Critical growing field with high demand and specialization options"),
            salary_range: Some("$75,000 - $150,000+"),
            personality_types: &[Tech, Engineering],
            fit_reason: None,
        },
    ),
    (
        Engineering,
        CareerTemplate {
            title: "Mechanical Engineer",
            description: "Design, develop, build, and test mechanical devices, including tools, engines, and machines.",
            skills: &["CAD design", "Problem-solving", "Technical drawing", "Material science", "Thermodynamics"],
            education: &["Mechanical Engineering degree", "Engineering Technology programs"],
            roles: &["Automotive", "Aerospace", "Manufacturing", "Energy", "Robotics"],
            growth_potential: Some("Stable field with opportunities in emerging technologies"),
            salary_range: Some("$65,000 - $120,000+"),
            personality_types: &[Engineering, Tech],
            fit_reason: None,
        },
    ),
    (
        Engineering,
        CareerTemplate {
            title: "Civil Engineer",
            description: "Design, build, and maintain infrastructure projects and systems, including roads, buildings, airports, tunnels, dams, bridges, and water supply systems.",
            skills: &["Structural analysis", "Project management", "AutoCAD", "Material testing", "Environmental considerations"],
            education: &["Civil Engineering degree", "Professional Engineer (PE) license"],
            roles: &["Construction", "Government", "Transportation", "Urban planning", "Environmental"],
            growth_potential: Some("Steady demand with opportunities in sustainable development"),
            salary_range: Some("$60,000 - $115,000+"),
            personality_types: &[Engineering, Science],
            fit_reason: None,
        },
    ),
    (
        Engineering,
        CareerTemplate {
            title: "Robotics Engineer",
            description: "Design, build, and maintain robots and robotic systems for various applications.",
            skills: &["Programming", "Mechanical design", "Electronics", "AI/Machine learning", "Control systems"],
            education: &["Robotics Engineering", "Mechanical Engineering", "Computer Science"],
            roles: &["Manufacturing", "Healthcare", "Aerospace", "Automotive", "Research"],
            growth_potential: Some("Rapidly growing field with cutting-edge opportunities"),
            salary_range: Some("$75,000 - $140,000+"),
            personality_types: &[Engineering, Tech],
            fit_reason: None,
        },
    ),
    (
        Science,
        CareerTemplate {
            title: "Research Scientist",
            description: "Conduct research to advance knowledge in a particular field, develop new products, or improve existing ones.",
            skills: &["Research methodology", "Data analysis", "Critical thinking", "Technical writing", "Lab techniques"],
            education: &["Master's or PhD in relevant science field"],
            roles: &["Pharmaceuticals", "Biotechnology", "Environmental", "Agriculture", "Academia"],
            growth_potential: Some("Specialized growth with opportunities for breakthrough research"),
            salary_range: Some("$65,000 - $130,000+"),
            personality_types: &[Science, Tech],
            fit_reason: None,
        },
    ),
    (
        Science,
        CareerTemplate {
            title: "Environmental Scientist",
            description: "Study environmental problems and develop solutions to protect the environment and human health.",
            skills: &["Environmental sampling", "Data analysis", "GIS mapping", "Regulatory knowledge", "Field research"],
            education: &["Environmental Science degree", "Biology", "Chemistry", "Earth Sciences"],
            roles: &["Government", "Consulting", "Non-profit", "Energy", "Manufacturing"],
            growth_potential: Some("Growing field with increasing focus on sustainability"),
            salary_range: Some("$55,000 - $110,000+"),
            personality_types: &[Science, Social],
            fit_reason: None,
        },
    ),
    (
        Science,
        CareerTemplate {
            title: "Medical Researcher",
            description: "Conduct research aimed at improving human health, from developing new treatments to understanding disease mechanisms.",
            skills: &["Clinical research", "Biostatistics", "Lab techniques", "Medical knowledge", "Scientific writing"],
            education: &["MD", "PhD in Life Sciences", "Combined MD-PhD"],
            roles: &["Pharmaceuticals", "Hospitals", "Universities", "Government agencies", "Research institutes"],
            growth_potential: Some("High-impact field with continuous innovation opportunities"),
            salary_range: Some("$70,000 - $150,000+"),
            personality_types: &[Science, Social],
            fit_reason: None,
        },
    ),
    (
        Business,
        CareerTemplate {
            title: "Marketing Manager",
            description: "Develop and implement marketing strategies to promote products, services, and brands.",
            skills: &["Market research", "Campaign planning", "Digital marketing", "Analytics", "Communication"],
            education: &["Marketing degree", "Business Administration", "Communications"],
            roles: &["Retail", "Tech", "Consumer goods", "Media", "Agencies"],
            growth_potential: Some("Dynamic field with paths to executive positions"),
            salary_range: Some("$60,000 - $140,000+"),
            personality_types: &[Business, Creative],
            fit_reason: None,
        },
    ),
    (
        Business,
        CareerTemplate {
            title: "Financial Analyst",
            description: "Evaluate financial data and market trends to help companies make investment decisions.",
            skills: &["Financial modeling", "Data analysis", "Research", "Reporting", "Forecasting"],
            education: &["Finance degree", "Accounting", "Economics", "CFA certification"],
            roles: &["Banking", "Investment firms", "Insurance", "Corporate finance", "Consulting"],
            growth_potential: Some("Stable career with advancement to senior analyst or management"),
            salary_range: Some("$65,000 - $125,000+"),
            personality_types: &[Business, Tech],
            fit_reason: None,
        },
    ),
    (
        Business,
        CareerTemplate {
            title: "Entrepreneur",
            description: "Start and run your own business ventures, identifying opportunities and taking calculated risks.",
            skills: &["Leadership", "Strategic thinking", "Problem-solving", "Networking", "Financial management"],
            education: &["Business degree", "Entrepreneurship programs", "Self-taught with experience"],
            roles: &["Any industry", "Startups", "Small business", "Tech", "E-commerce"],
            growth_potential: Some("Unlimited potential with high risk and high reward"),
            salary_range: Some("Variable, from $0 to millions"),
            personality_types: &[Business, Creative],
            fit_reason: None,
        },
    ),
    (
        Creative,
        CareerTemplate {
            title: "UX/UI Designer",
            description: "Design user interfaces and experiences for websites, apps, and digital products that are both functional and appealing.",
            skills: &["User research", "Wireframing", "Prototyping", "Visual design", "Usability testing"],
            education: &["Design degree", "UX bootcamps", "Self-taught with portfolio"],
            roles: &["Tech", "Agencies", "E-commerce", "Media", "Gaming"],
            growth_potential: Some("Growing field with increasing focus on user experience"),
            salary_range: Some("$60,000 - $130,000+"),
            personality_types: &[Creative, Tech],
            fit_reason: None,
        },
    ),
    (
        Creative,
        CareerTemplate {
            title: "Content Creator",
            description: "Produce engaging content across various platforms, including videos, blogs, podcasts, and social media.",
            skills: &["Storytelling", "Video editing", "Writing", "Social media", "Audience engagement"],
            education: &["Communications", "Media Studies", "Self-taught with portfolio"],
            roles: &["Media", "Entertainment", "Marketing", "Education", "Independent"],
            growth_potential: Some("Expanding field with opportunities for personal branding"),
            salary_range: Some("$40,000 - $100,000+ (highly variable)"),
            personality_types: &[Creative, Social],
            fit_reason: None,
        },
    ),
    (
        Creative,
        CareerTemplate {
            title: "Game Designer",
            description: "Create concepts, characters, stories, and gameplay mechanics for video games.",
            skills: &["Game mechanics", "Storytelling", "Level design", "Prototyping", "Player psychology"],
            education: &["Game Design degree", "Computer Science", "Self-taught with portfolio"],
            roles: &["Gaming studios", "Mobile gaming", "Educational games", "Independent development"],
            growth_potential: Some("Growing industry with opportunities in emerging technologies"),
            salary_range: Some("$50,000 - $120,000+"),
            personality_types: &[Creative, Tech],
            fit_reason: None,
        },
    ),
    (
        Social,
        CareerTemplate {
            title: "Social Worker",
            description: "Help individuals, families, and communities enhance their well-being and solve personal and social problems.",
            skills: &["Counseling", "Case management", "Advocacy", "Crisis intervention", "Community outreach"],
            education: &["Social Work degree (BSW/MSW)", "Psychology", "Human Services"],
            roles: &["Healthcare", "Government", "Non-profit", "Schools", "Community services"],
            growth_potential: Some("Stable field with opportunities for specialization"),
            salary_range: Some("$45,000 - $80,000+"),
            personality_types: &[Social, Creative],
            fit_reason: None,
        },
    ),
    (
        Social,
        CareerTemplate {
            title: "Teacher/Educator",
            description: "Educate students of various ages, develop curriculum, and foster learning environments.",
            skills: &["Instruction", "Curriculum development", "Classroom management", "Assessment", "Communication"],
            education: &["Education degree", "Teaching certification", "Subject expertise"],
            roles: &["K-12 schools", "Higher education", "Online learning", "Corporate training", "Educational technology"],
            growth_potential: Some("Stable career with paths to administration or specialization"),
            salary_range: Some("$45,000 - $90,000+"),
            personality_types: &[Social, Creative],
            fit_reason: None,
        },
    ),
    (
        Social,
        CareerTemplate {
            title: "Healthcare Administrator",
            description: "Manage healthcare facilities, services, programs, staff, budgets, and relations with other organizations.",
            skills: &["Leadership", "Healthcare regulations", "Budgeting", "Staff management", "Strategic planning"],
            education: &["Healthcare Administration degree", "Business", "Public Health"],
            roles: &["Hospitals", "Clinics", "Nursing homes", "Public health agencies", "Insurance"],
            growth_potential: Some("Growing field with increasing healthcare demand"),
            salary_range: Some("$65,000 - $130,000+"),
            personality_types: &[Social, Business],
            fit_reason: None,
        },
    ),
];
