use serde::{Deserialize, Serialize};

/// The four text blobs shown on the updates feed.
///
/// Stored as one JSON object under the `schoolUpdates` key and always replaced
/// wholesale. Field names are camelCase on the wire so records written by
/// earlier versions of the site keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Updates {
    /// Upcoming school events.
    pub upcoming_events: String,
    /// The weekly review (vlog) summary.
    pub weekly_review: String,
    /// Description of the club.
    pub about_club: String,
    /// General announcements.
    pub announcements: String,
}

impl Default for Updates {
    fn default() -> Self {
        Self {
            upcoming_events: "Join us for our annual sports day on March 15th!".to_string(),
            weekly_review: "This week we had a successful parent-teacher meeting.".to_string(),
            about_club: "Join the photography club to capture beautiful moments and improve \
                         your skills. We welcome all levels, from beginners to advanced \
                         photographers. Together, we will explore creativity and share our \
                         passion for photography!"
                .to_string(),
            announcements: "Stay tuned for important school announcements and updates!"
                .to_string(),
        }
    }
}

impl Updates {
    /// Returns the text for one category.
    pub fn get(&self, category: Category) -> &str {
        match category {
            Category::UpcomingEvents => &self.upcoming_events,
            Category::WeeklyReview => &self.weekly_review,
            Category::AboutClub => &self.about_club,
            Category::Announcements => &self.announcements,
        }
    }

    /// Replaces the text for one category.
    pub fn set(&mut self, category: Category, text: impl Into<String>) {
        let text = text.into();
        match category {
            Category::UpcomingEvents => self.upcoming_events = text,
            Category::WeeklyReview => self.weekly_review = text,
            Category::AboutClub => self.about_club = text,
            Category::Announcements => self.announcements = text,
        }
    }
}

/// One of the four sections of [`Updates`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    UpcomingEvents,
    WeeklyReview,
    AboutClub,
    Announcements,
}

impl Category {
    /// Feed order.
    pub const ALL: [Category; 4] = [
        Category::UpcomingEvents,
        Category::WeeklyReview,
        Category::AboutClub,
        Category::Announcements,
    ];

    /// Heading shown on the feed card and used as the detail-view title.
    pub fn title(self) -> &'static str {
        match self {
            Category::UpcomingEvents => "Upcoming Events",
            Category::WeeklyReview => "Weekly Review (Vlog)",
            Category::AboutClub => "About the Club",
            Category::Announcements => "Announcements",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(Updates::default()).unwrap();
        let object = json.as_object().unwrap();
        for key in ["upcomingEvents", "weeklyReview", "aboutClub", "announcements"] {
            assert!(object.contains_key(key), "missing {key}");
        }
    }

    #[test]
    fn set_then_get_addresses_the_same_field() {
        let mut updates = Updates::default();
        for (i, category) in Category::ALL.into_iter().enumerate() {
            updates.set(category, format!("text {i}"));
        }
        assert_eq!(updates.get(Category::UpcomingEvents), "text 0");
        assert_eq!(updates.get(Category::WeeklyReview), "text 1");
        assert_eq!(updates.about_club, "text 2");
        assert_eq!(updates.announcements, "text 3");
    }

    #[test]
    fn default_about_text_is_a_single_paragraph() {
        let about = Updates::default().about_club;
        assert!(about.starts_with("Join the photography club"));
        assert!(about.contains("improve your skills. We welcome"));
        assert!(!about.contains("  "));
    }
}
