/*!
 * Console
 *
 * Menu-driven front end over a [`Clinic`]. Reads decimal choices and field
 * values line by line; invalid numbers are reported and re-prompted. End of
 * input is treated as "Save and Exit". A failing input or output stream ends
 * the session too: records are saved before the stream error is returned.
 */

mod menu;

pub use menu::{MainMenu, QueueMenu};

use crate::clinic::Clinic;
use crate::core::types::{Age, ClinicResult, DoctorId, PatientId};
use crate::doctors::DoctorRecord;
use crate::monitoring::generate_session_id;
use crate::patients::PatientRecord;
use crate::queue::VisitQueue;
use crate::vfs::FileSystem;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::{error, info, info_span, warn};

/// How the main loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// "Save and Exit" was chosen
    Requested,
    /// Input ran out
    EndOfInput,
}

/// Interactive session bound to an input and an output stream
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the main menu until exit, then save through `fs`
    pub fn run(&mut self, clinic: &mut Clinic, fs: &dyn FileSystem) -> ClinicResult<Exit> {
        let session = self.session(clinic);
        if let Err(e) = &session {
            warn!(error = %e, "Console stream failed, saving before exit");
        }

        clinic.save(fs)?;
        let exit = session?;
        writeln!(self.output, "Data saved. Exiting program...")?;
        info!(?exit, "Console session finished");
        Ok(exit)
    }

    fn session(&mut self, clinic: &mut Clinic) -> ClinicResult<Exit> {
        let exit = loop {
            self.print_main_menu()?;
            let Some(choice) = self.read_line()? else {
                break Exit::EndOfInput;
            };

            let item = choice.trim().parse().ok().and_then(MainMenu::from_choice);
            let Some(item) = item else {
                writeln!(self.output, "Invalid choice. Try again.")?;
                continue;
            };

            let finished = match item {
                MainMenu::AddPatient => self.add_patient(clinic)?,
                MainMenu::RemovePatient => self.remove_patient(clinic)?,
                MainMenu::DisplayPatients => self.display_patients(clinic)?,
                MainMenu::DisplayDoctors => self.display_doctors(clinic)?,
                MainMenu::AddDoctor => self.add_doctor(clinic)?,
                MainMenu::AssignDoctor => self.assign_doctor(clinic)?,
                MainMenu::ManageQueue => self.manage_queue(clinic)?,
                MainMenu::DisplayAssignments => self.display_assignments(clinic)?,
                MainMenu::SaveAndExit => break Exit::Requested,
            };
            if !finished {
                break Exit::EndOfInput;
            }
        };
        Ok(exit)
    }

    fn print_main_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n===== Patient Management System =====")?;
        for item in MainMenu::ALL {
            writeln!(self.output, "{}. {}", item.choice(), item.label())?;
        }
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()
    }

    /// Next input line without its newline; `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn prompt_text(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        Ok(self.read_line()?.map(|s| s.trim().to_string()))
    }

    /// Prompt until a decimal value parses; `None` at end of input
    fn prompt_number<T: FromStr>(&mut self, prompt: &str) -> io::Result<Option<T>> {
        loop {
            let Some(text) = self.prompt_text(prompt)? else {
                return Ok(None);
            };
            match text.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Invalid number: {:?}", text)?,
            }
        }
    }

    // Each action returns Ok(false) when input ran out mid-prompt

    fn add_patient(&mut self, clinic: &mut Clinic) -> ClinicResult<bool> {
        let Some(id) = self.prompt_number::<PatientId>("Enter patient ID: ")? else {
            return Ok(false);
        };
        let Some(name) = self.prompt_text("Enter patient name: ")? else {
            return Ok(false);
        };
        let Some(age) = self.prompt_number::<Age>("Enter patient age: ")? else {
            return Ok(false);
        };
        let Some(disease) = self.prompt_text("Enter disease: ")? else {
            return Ok(false);
        };
        let Some(history) = self.prompt_text("Enter visit history: ")? else {
            return Ok(false);
        };

        match clinic.add_patient(PatientRecord::new(id, name, age, disease, history)) {
            Ok(_) => writeln!(self.output, "Patient added successfully!")?,
            Err(e) => self.report(&e)?,
        }
        Ok(true)
    }

    fn remove_patient(&mut self, clinic: &mut Clinic) -> ClinicResult<bool> {
        let Some(id) = self.prompt_number::<PatientId>("Enter patient ID to remove: ")? else {
            return Ok(false);
        };
        match clinic.remove_patient(id) {
            Ok(_) => writeln!(self.output, "Patient removed successfully!")?,
            Err(e) => self.report(&e)?,
        }
        Ok(true)
    }

    fn display_patients(&mut self, clinic: &Clinic) -> ClinicResult<bool> {
        writeln!(self.output, "\n=== Patient Records ===")?;
        for patient in clinic.patients() {
            writeln!(self.output, "{}", patient)?;
        }
        Ok(true)
    }

    fn display_doctors(&mut self, clinic: &Clinic) -> ClinicResult<bool> {
        writeln!(self.output, "\n=== Doctors ===")?;
        for doctor in clinic.doctors() {
            writeln!(self.output, "{}", doctor)?;
        }
        Ok(true)
    }

    fn add_doctor(&mut self, clinic: &mut Clinic) -> ClinicResult<bool> {
        let Some(id) = self.prompt_number::<DoctorId>("Enter doctor ID: ")? else {
            return Ok(false);
        };
        let Some(name) = self.prompt_text("Enter doctor name: ")? else {
            return Ok(false);
        };
        let Some(specialty) = self.prompt_text("Enter doctor's specialty: ")? else {
            return Ok(false);
        };

        match clinic.add_doctor(DoctorRecord::new(id, name, specialty)) {
            Ok(_) => writeln!(self.output, "Doctor added successfully!")?,
            Err(e) => self.report(&e)?,
        }
        Ok(true)
    }

    fn assign_doctor(&mut self, clinic: &mut Clinic) -> ClinicResult<bool> {
        let Some(doctor_id) = self.prompt_number::<DoctorId>("Enter doctor ID: ")? else {
            return Ok(false);
        };
        let Some(patient_id) = self.prompt_number::<PatientId>("Enter patient ID: ")? else {
            return Ok(false);
        };

        if let Some(previous) = clinic.assign(doctor_id, patient_id) {
            writeln!(self.output, "Patient {} was assigned to Doctor {}", patient_id, previous)?;
        }
        writeln!(self.output, "Assigned Patient {} to Doctor {}", patient_id, doctor_id)?;
        Ok(true)
    }

    fn display_assignments(&mut self, clinic: &Clinic) -> ClinicResult<bool> {
        writeln!(self.output, "\n=== Doctor Assignments ===")?;
        for roster in clinic.assignments() {
            writeln!(
                self.output,
                "Doctor: {}, Specialty: {}",
                roster.doctor.name, roster.doctor.specialty
            )?;
            for patient in roster.patients {
                writeln!(
                    self.output,
                    "  Patient: {}, Disease: {}",
                    patient.name, patient.disease
                )?;
            }
        }
        Ok(true)
    }

    fn manage_queue(&mut self, clinic: &Clinic) -> ClinicResult<bool> {
        let session_id = generate_session_id();
        let span = info_span!("queue_session", session_id = %session_id);
        let _enter = span.enter();

        let mut queue = clinic.queue_session();
        info!(capacity = queue.capacity(), "Queue session started");

        loop {
            writeln!(self.output, "\nQueue Management:")?;
            for item in QueueMenu::ALL {
                writeln!(self.output, "{}. {}", item.choice(), item.label())?;
            }
            write!(self.output, "Enter your choice: ")?;
            self.output.flush()?;

            let Some(choice) = self.read_line()? else {
                return Ok(false);
            };
            let item = choice.trim().parse().ok().and_then(QueueMenu::from_choice);
            match item {
                Some(QueueMenu::Enqueue) => {
                    let Some(id) = self.prompt_number::<PatientId>("Enter patient ID: ")? else {
                        return Ok(false);
                    };
                    match queue.enqueue(id) {
                        Ok(()) => writeln!(self.output, "Patient {} added to queue", id)?,
                        Err(e) => self.report(&e)?,
                    }
                }
                Some(QueueMenu::Dequeue) => match queue.dequeue() {
                    Ok(id) => writeln!(self.output, "Patient {} removed from queue", id)?,
                    Err(e) => self.report(&e)?,
                },
                Some(QueueMenu::Display) => self.display_queue(&queue)?,
                Some(QueueMenu::Back) => {
                    info!(pending = queue.len(), "Queue session ended");
                    return Ok(true);
                }
                None => writeln!(self.output, "Invalid choice. Try again.")?,
            }
        }
    }

    fn display_queue(&mut self, queue: &VisitQueue) -> io::Result<()> {
        if queue.is_empty() {
            return writeln!(self.output, "Queue is empty");
        }
        for id in queue.iter() {
            writeln!(self.output, "Patient ID: {}", id)?;
        }
        Ok(())
    }

    fn report(&mut self, err: &dyn std::error::Error) -> io::Result<()> {
        error!(error = %err, "Operation failed");
        writeln!(self.output, "Error: {}", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClinicConfig;
    use crate::core::ClinicError;
    use crate::vfs::MemFS;
    use std::io::Cursor;

    fn run(script: &str, clinic: &mut Clinic, fs: &MemFS) -> (Exit, String) {
        let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let exit = console.run(clinic, fs).unwrap();
        (exit, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn test_add_and_display_patient() {
        let fs = MemFS::new();
        let mut clinic = Clinic::new(ClinicConfig::default());
        let (exit, out) = run("1\n5\nAlice\n30\nFlu\nnone\n3\n8\n", &mut clinic, &fs);

        assert_eq!(exit, Exit::Requested);
        assert!(out.contains("Patient added successfully!"));
        assert!(out.contains("ID: 5, Name: Alice, Age: 30, Disease: Flu, Visit History: none"));
        assert!(out.contains("Data saved. Exiting program..."));
        assert!(fs.exists(std::path::Path::new("patients.txt")));
    }

    #[test]
    fn test_invalid_choice_and_number_reprompt() {
        let fs = MemFS::new();
        let mut clinic = Clinic::new(ClinicConfig::default());
        let (_, out) = run("abc\n42\n2\nfive\n5\n8\n", &mut clinic, &fs);

        assert_eq!(out.matches("Invalid choice. Try again.").count(), 2);
        assert!(out.contains("Invalid number: \"five\""));
        assert!(out.contains("Error: Patient 5 not found"));
    }

    #[test]
    fn test_end_of_input_saves() {
        let fs = MemFS::new();
        let mut clinic = Clinic::new(ClinicConfig::default());
        let (exit, _) = run("5\n7\nGrey\n", &mut clinic, &fs);

        assert_eq!(exit, Exit::EndOfInput);
        assert!(clinic.doctors().is_empty());
        assert!(fs.exists(std::path::Path::new("doctors.txt")));
    }

    #[test]
    fn test_unreadable_input_still_saves() {
        let fs = MemFS::new();
        let mut clinic = Clinic::new(ClinicConfig::default());
        let mut script = b"1\n5\nAlice\n30\nFlu\nnone\n".to_vec();
        script.extend_from_slice(b"\xff\n");

        let mut console = Console::new(Cursor::new(script), Vec::new());
        let result = console.run(&mut clinic, &fs);

        assert!(matches!(result, Err(ClinicError::Io(_))));
        let saved = fs.read(std::path::Path::new("patients.txt")).unwrap();
        assert_eq!(saved, b"5,Alice,30,Flu,none\n");
    }

    #[test]
    fn test_closed_output_still_saves() {
        struct ClosedOutput;

        impl Write for ClosedOutput {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let fs = MemFS::new();
        let mut clinic = Clinic::new(ClinicConfig::default());
        clinic
            .add_doctor(DoctorRecord::new(4, "Grey", "Surgery"))
            .unwrap();

        let mut console = Console::new(Cursor::new(b"8\n".to_vec()), ClosedOutput);
        assert!(console.run(&mut clinic, &fs).is_err());
        assert_eq!(
            fs.read(std::path::Path::new("doctors.txt")).unwrap(),
            b"4,Grey,Surgery\n"
        );
    }

    #[test]
    fn test_queue_session() {
        let fs = MemFS::new();
        let mut clinic = Clinic::new(ClinicConfig::default().with_queue_capacity(1));
        let script = "7\n1\n11\n1\n12\n3\n2\n2\n4\n8\n";
        let (_, out) = run(script, &mut clinic, &fs);

        assert!(out.contains("Patient 11 added to queue"));
        assert!(out.contains("Error: Queue is full (1 slots)"));
        assert!(out.contains("Patient ID: 11"));
        assert!(out.contains("Patient 11 removed from queue"));
        assert!(out.contains("Error: Queue is empty"));
    }

    #[test]
    fn test_assign_and_display_assignments() {
        let fs = MemFS::new();
        let mut clinic = Clinic::new(ClinicConfig::default());
        let script = "5\n3\nGregory House\nDiagnostics\n1\n8\nAnn\n9\nPox\nnone\n6\n3\n8\n9\n8\n";
        let (_, out) = run(script, &mut clinic, &fs);

        assert!(out.contains("Assigned Patient 8 to Doctor 3"));
        assert!(out.contains("Doctor: Gregory House, Specialty: Diagnostics"));
        assert!(out.contains("  Patient: Ann, Disease: Pox"));
    }
}
