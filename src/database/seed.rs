use crate::models::{Activity, Catalog, Participant};

struct SeedActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: u32,
    participants: &'static [(&'static str, &'static str)],
}

const SEED: &[SeedActivity] = &[
    SeedActivity {
        name: "Soccer Team",
        description: "Join the school soccer team and compete in inter-school matches",
        schedule: "Mondays and Wednesdays, 4:00 PM - 6:00 PM",
        max_participants: 25,
        participants: &[
            ("Alex Johnson", "alex@mergington.edu"),
            ("James Smith", "james@mergington.edu"),
        ],
    },
    SeedActivity {
        name: "Basketball Club",
        description: "Practice basketball skills and participate in tournaments",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 15,
        participants: &[("Sarah Williams", "sarah@mergington.edu")],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Participate in theater productions and develop acting skills",
        schedule: "Wednesdays, 3:30 PM - 5:30 PM",
        max_participants: 25,
        participants: &[
            ("Emily Brown", "emily@mergington.edu"),
            ("Lucas Davis", "lucas@mergington.edu"),
        ],
    },
    SeedActivity {
        name: "Art Studio",
        description: "Explore various art mediums including painting, drawing, and sculpture",
        schedule: "Fridays, 3:00 PM - 5:00 PM",
        max_participants: 18,
        participants: &[("Mia Martinez", "mia@mergington.edu")],
    },
    SeedActivity {
        name: "Debate Team",
        description: "Develop critical thinking and public speaking through competitive debates",
        schedule: "Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 16,
        participants: &[
            ("Noah Garcia", "noah@mergington.edu"),
            ("Ava Rodriguez", "ava@mergington.edu"),
        ],
    },
    SeedActivity {
        name: "Science Olympiad",
        description: "Compete in science competitions and conduct experiments",
        schedule: "Tuesdays, 3:30 PM - 5:00 PM",
        max_participants: 20,
        participants: &[("Liam Wilson", "liam@mergington.edu")],
    },
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &[
            ("Michael Anderson", "michael@mergington.edu"),
            ("Daniel Thomas", "daniel@mergington.edu"),
        ],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &[
            ("Emma Taylor", "emma@mergington.edu"),
            ("Sophia Moore", "sophia@mergington.edu"),
        ],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &[
            ("John Jackson", "john@mergington.edu"),
            ("Olivia White", "olivia@mergington.edu"),
        ],
    },
];

pub fn reference_catalog() -> Catalog {
    let activities = SEED
        .iter()
        .map(|seed| Activity {
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            schedule: seed.schedule.to_string(),
            max_participants: seed.max_participants,
            participants: seed
                .participants
                .iter()
                .map(|(name, email)| Participant::new(*name, *email))
                .collect(),
        })
        .collect();
    Catalog::new(activities)
}
