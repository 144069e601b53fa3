use super::domain::{AnswerOption, Question, TraitCategory};
use serde::Serialize;

/// Ordered, immutable set of questions presented to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// The nine-scenario questionnaire shipped with the application.
    pub fn standard() -> Self {
        Self::new(vec![
            scenario(
                1,
                "Your school is hosting a tech fair, and you get to lead a booth to showcase anything that interests you. What would you showcase?",
                [
                    "A phone app to help students track homework",
                    "A 3D-printed solar-powered car you designed",
                    "A science experiment showing how bacteria grow in different conditions",
                    "A mini-business selling custom DIY items created by you",
                    "A short blog you made about your life outside of school",
                    "Promote a volunteering program organized to help nearby orphanages out",
                ],
            ),
            scenario(
                2,
                "Given that your school has multiple problems, you are asked to choose a problem you want to help fix. Which of the following would you prefer to help with?",
                [
                    "Create a website to streamline ticket sales and event updates",
                    "Construct a sturdy stage setup using tools and materials",
                    "Research why the event's food spoiled and suggest solutions",
                    "Create a marketing plan to boost attendance and raise funds",
                    "Design eye-catching posters and a theme song for the upcoming event",
                    "Set up a support booth to help attendees feel welcome and safe",
                ],
            ),
            scenario(
                3,
                "You win a scholarship to join a summer program. Which one do you pick?",
                [
                    "Coding bootcamp to build your own video games",
                    "Workshop to design and test small bridges or robots",
                    "Lab program to study renewable energy",
                    "Entrepreneurship camp to pitch startup idea to investors",
                    "Art camp to create a portfolio of drawings or music",
                    "Volunteer program to teach kids or help at a community center",
                ],
            ),
            scenario(
                4,
                "Your town is hosting a festival, and you're on the planning team. What's your contribution?",
                [
                    "A digital map app to help visitors navigate the festival",
                    "A custom-built photo booth with cool mechanical features",
                    "A display explaining the environmental impact of the festival",
                    "A plan to sell tickets and manage the festival's budget",
                    "A live performance or colorful banners to decorate the event",
                    "A booth to connect visitors with local charities or resources",
                ],
            ),
            scenario(
                5,
                "You're given $500 to start a small project. What do you do with it?",
                [
                    "Buy software to create a study app for your classmates",
                    "Get materials to build a model wind turbine or gadget",
                    "Purchase lab supplies to test air quality in your town",
                    "Start a small online store selling custom phone cases",
                    "Invest in art supplies to create a comic book or music video",
                    "Fund a community garden or donation drive for families in need",
                ],
            ),
            scenario(
                6,
                "Your school's social media page needs a boost. What content do you create?",
                [
                    "A fun quiz app to engage students online",
                    "A time-lapse video of building a new school feature, like a bench",
                    "Infographics about local wildlife or energy-saving tips",
                    "A campaign to promote school merch and raise funds",
                    "A series of short skits or artwork showcasing school spirit",
                    "Stories highlighting students helping the community",
                ],
            ),
            scenario(
                7,
                "You're asked to lead a group project for a national contest. What's your idea?",
                [
                    "An AI chatbot to answer students' homework questions",
                    "A prototype for a foldable bike that's easy to store",
                    "A study on how screen time affects sleep patterns",
                    "A business plan for a teen-run delivery service",
                    "A short film or song about a social issue you care about",
                    "A program to mentor younger kids in your school",
                ],
            ),
            scenario(
                8,
                "You get to shadow a professional for a day. Who do you choose?",
                [
                    "A coder working on a new gaming app",
                    "An engineer designing eco-friendly buildings",
                    "A scientist researching climate change solutions",
                    "A startup founder pitching to investors",
                    "A graphic designer or musician creating new content",
                    "A teacher or counselor helping students succeed",
                ],
            ),
            scenario(
                9,
                "Your community needs help after a storm. How do you contribute?",
                [
                    "Create a website to share updates and connect volunteers",
                    "Help rebuild damaged structures, like fences or shelters",
                    "Test water samples to ensure they're safe for drinking",
                    "Organize a fundraiser to support affected families",
                    "Design flyers or record a video to raise awareness",
                    "Volunteer to distribute supplies or comfort residents",
                ],
            ),
        ])
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

// Options are lettered a-f and typed in trait declaration order.
fn scenario(id: u32, text: &str, options: [&str; 6]) -> Question {
    let options = options
        .iter()
        .zip(TraitCategory::ordered())
        .zip(['a', 'b', 'c', 'd', 'e', 'f'])
        .map(|((option_text, category), letter)| {
            AnswerOption::typed(&format!("{id}{letter}"), option_text, category)
        })
        .collect();

    Question {
        id,
        text: text.to_string(),
        options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_bank_has_nine_fully_typed_questions() {
        let bank = QuestionBank::standard();
        assert_eq!(bank.len(), 9);

        for (index, question) in bank.questions().iter().enumerate() {
            assert_eq!(question.id, index as u32 + 1);
            assert_eq!(question.options.len(), 6);
            let traits: HashSet<_> = question
                .options
                .iter()
                .filter_map(|option| option.trait_category)
                .collect();
            assert_eq!(traits.len(), 6, "question {} covers every trait", question.id);
        }
    }

    #[test]
    fn option_ids_follow_question_letter_convention() {
        let bank = QuestionBank::standard();
        let question = bank.question(4).expect("question 4 present");
        let creative = question.option("4e").expect("option 4e present");
        assert_eq!(creative.trait_category, Some(TraitCategory::Creative));
        assert!(creative.text.contains("banners"));
        assert!(bank.question(10).is_none());
    }
}
