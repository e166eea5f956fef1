//! Starter catalog loaded at process start.

use super::Activity;

pub fn seed_activities() -> Vec<Activity> {
    vec![
        Activity::new(
            "Soccer Team",
            "Join our competitive soccer team and represent the school",
            "Mondays and Wednesdays, 4:00 PM - 6:00 PM",
            25,
        )
        .with_participants(["alex@mergington.edu", "sarah@mergington.edu"]),
        Activity::new(
            "Basketball Club",
            "Practice basketball skills and play friendly matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            15,
        )
        .with_participants(["james@mergington.edu"]),
        Activity::new(
            "Art Club",
            "Express creativity through painting, drawing, and sculpture",
            "Wednesdays, 3:30 PM - 5:00 PM",
            18,
        )
        .with_participants(["lucy@mergington.edu", "david@mergington.edu"]),
        Activity::new(
            "Drama Society",
            "Participate in theatrical productions and improve acting skills",
            "Fridays, 4:00 PM - 6:00 PM",
            20,
        )
        .with_participants(["anna@mergington.edu"]),
        Activity::new(
            "Debate Club",
            "Develop critical thinking and public speaking through structured debates",
            "Thursdays, 3:30 PM - 5:00 PM",
            16,
        )
        .with_participants(["robert@mergington.edu", "maria@mergington.edu"]),
        Activity::new(
            "Science Olympiad",
            "Compete in scientific challenges and experiments",
            "Saturdays, 10:00 AM - 12:00 PM",
            24,
        )
        .with_participants([
            "kevin@mergington.edu",
            "jennifer@mergington.edu",
            "thomas@mergington.edu",
        ]),
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        Activity::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        Activity::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_names_are_unique() {
        let activities = seed_activities();
        let names: HashSet<&str> = activities.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names.len(), activities.len());
        assert_eq!(activities.len(), 9);
    }

    #[test]
    fn test_seed_rosters_have_no_duplicates() {
        for activity in seed_activities() {
            let unique: HashSet<&String> = activity.participants.iter().collect();
            assert_eq!(unique.len(), activity.participants.len(), "{}", activity.name);
            assert!(activity.max_participants > 0);
        }
    }

    #[test]
    fn test_soccer_team_seed_roster() {
        let soccer = seed_activities().into_iter().find(|a| a.name == "Soccer Team").unwrap();
        assert_eq!(soccer.participants, vec!["alex@mergington.edu", "sarah@mergington.edu"]);
    }
}
