/*!
 * Menu Choices
 */

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenu {
    AddPatient,
    RemovePatient,
    DisplayPatients,
    DisplayDoctors,
    AddDoctor,
    AssignDoctor,
    ManageQueue,
    SaveAndExit,
    DisplayAssignments,
}

impl MainMenu {
    pub const ALL: [MainMenu; 9] = [
        MainMenu::AddPatient,
        MainMenu::RemovePatient,
        MainMenu::DisplayPatients,
        MainMenu::DisplayDoctors,
        MainMenu::AddDoctor,
        MainMenu::AssignDoctor,
        MainMenu::ManageQueue,
        MainMenu::SaveAndExit,
        MainMenu::DisplayAssignments,
    ];

    pub fn from_choice(choice: u32) -> Option<Self> {
        let index = (choice as usize).checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn choice(self) -> u32 {
        Self::ALL.iter().position(|&m| m == self).map_or(0, |i| i as u32 + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            MainMenu::AddPatient => "Add Patient",
            MainMenu::RemovePatient => "Remove Patient",
            MainMenu::DisplayPatients => "Display Patients",
            MainMenu::DisplayDoctors => "Display Doctors",
            MainMenu::AddDoctor => "Add Doctor",
            MainMenu::AssignDoctor => "Assign Doctor to Patient",
            MainMenu::ManageQueue => "Manage Waiting Queue",
            MainMenu::SaveAndExit => "Save and Exit",
            MainMenu::DisplayAssignments => "Display Doctor Assignments",
        }
    }
}

/// Queue management entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueMenu {
    Enqueue,
    Dequeue,
    Display,
    Back,
}

impl QueueMenu {
    pub const ALL: [QueueMenu; 4] = [
        QueueMenu::Enqueue,
        QueueMenu::Dequeue,
        QueueMenu::Display,
        QueueMenu::Back,
    ];

    pub fn from_choice(choice: u32) -> Option<Self> {
        let index = (choice as usize).checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn choice(self) -> u32 {
        Self::ALL.iter().position(|&m| m == self).map_or(0, |i| i as u32 + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            QueueMenu::Enqueue => "Add Patient to Queue",
            QueueMenu::Dequeue => "Remove Patient from Queue",
            QueueMenu::Display => "Display Queue",
            QueueMenu::Back => "Back to Main Menu",
        }
    }
}
