/// One row of the demo table.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub notes: Vec<String>,
}

impl Record {
    fn new(id: u32, name: &str, email: &str, role: &str, notes: &[&str]) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            notes: notes.iter().map(|n| n.to_string()).collect(),
        }
    }
}

pub fn sample() -> Vec<Record> {
    vec![
        Record::new(
            1,
            "Ada Lovelace",
            "ada@example.com",
            "Analyst",
            &["Wrote the first published algorithm.", "Prefers email contact."],
        ),
        Record::new(
            2,
            "Grace Hopper",
            "grace@example.com",
            "Engineer",
            &["Compiler work.", "On call this week."],
        ),
        Record::new(3, "Alan Turing", "alan@example.com", "Researcher", &[]),
    ]
}
