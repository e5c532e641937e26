use crate::adapters::console::CountingConsole;
use crate::config::toml_config::TourConfig;
use crate::core::arithmetic::divide_recovering;
use crate::core::control::{compare, evaluate_number, max_of};
use crate::core::functions::{add, greet, subtraction};
use crate::core::loops::{count_do_while, count_through, count_while};
use crate::core::polymorphism::{drive, put_to_work};
use crate::domain::model::{Car, Employee, Person, Profile};
use crate::domain::ports::Console;
use crate::utils::error::TourError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lesson {
    Variables,
    Functions,
    Control,
    Loops,
    Exceptions,
    Classes,
    Inheritance,
    Interfaces,
}

impl Lesson {
    /// Every lesson, in the order the tour presents them.
    pub const ALL: [Lesson; 8] = [
        Lesson::Variables,
        Lesson::Functions,
        Lesson::Control,
        Lesson::Loops,
        Lesson::Exceptions,
        Lesson::Classes,
        Lesson::Inheritance,
        Lesson::Interfaces,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Lesson::Variables => "variables",
            Lesson::Functions => "functions",
            Lesson::Control => "control",
            Lesson::Loops => "loops",
            Lesson::Exceptions => "exceptions",
            Lesson::Classes => "classes",
            Lesson::Inheritance => "inheritance",
            Lesson::Interfaces => "interfaces",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Lesson::Variables => "Variables y Tipos de Datos",
            Lesson::Functions => "Funciones",
            Lesson::Control => "Estructuras de Control",
            Lesson::Loops => "Estructuras Iterativas",
            Lesson::Exceptions => "Manejo de Excepciones",
            Lesson::Classes => "Clases y Objetos",
            Lesson::Inheritance => "Herencia",
            Lesson::Interfaces => "Interfaces y Polimorfismo",
        }
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Lesson {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Lesson::ALL
            .into_iter()
            .find(|lesson| lesson.name() == wanted)
            .ok_or_else(|| TourError::UnknownLessonError {
                name: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonEntry {
    pub lesson: Lesson,
    pub title: &'static str,
    /// Lines printed by the lesson, header included.
    pub lines: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TourReport {
    pub name: String,
    pub started_at: DateTime<Utc>,
    pub lessons: Vec<LessonEntry>,
    pub total_lines: usize,
    pub recovered_failures: usize,
    pub transcript: Vec<String>,
}

pub struct Tour {
    config: TourConfig,
}

impl Tour {
    pub fn new(config: TourConfig) -> Self {
        Self { config }
    }

    /// Runs `lessons` in the given order, printing through `console`.
    pub fn run(&self, console: &mut dyn Console, lessons: &[Lesson]) -> TourReport {
        let started_at = Utc::now();
        tracing::info!("Starting tour '{}' with {} lessons", self.config.tour.name, lessons.len());

        let mut counting = CountingConsole::new(console);
        let mut entries = Vec::with_capacity(lessons.len());
        let mut recovered_failures = 0;

        for &lesson in lessons {
            let before = counting.count();
            counting.line(&format!("== {} ==", lesson.title()));
            recovered_failures += self.run_lesson(&mut counting, lesson);
            let lines = counting.count() - before;
            tracing::debug!("Lesson {} printed {} lines", lesson, lines);
            entries.push(LessonEntry {
                lesson,
                title: lesson.title(),
                lines,
            });
        }

        let transcript = counting.into_transcript();

        tracing::info!(
            "Tour finished: {} lines, {} recovered failures",
            transcript.len(),
            recovered_failures
        );

        TourReport {
            name: self.config.tour.name.clone(),
            started_at,
            lessons: entries,
            total_lines: transcript.len(),
            recovered_failures,
            transcript,
        }
    }

    /// Runs one lesson and returns how many failures it recovered from.
    pub fn run_lesson(&self, console: &mut dyn Console, lesson: Lesson) -> usize {
        match lesson {
            Lesson::Variables => self.variables(console),
            Lesson::Functions => self.functions(console),
            Lesson::Control => self.control(console),
            Lesson::Loops => self.loops(console),
            Lesson::Exceptions => return self.exceptions(console),
            Lesson::Classes => self.classes(console),
            Lesson::Inheritance => self.inheritance(console),
            Lesson::Interfaces => self.interfaces(console),
        }
        0
    }

    fn variables(&self, console: &mut dyn Console) {
        let vars = &self.config.variables;
        let mut profile = Profile::new(vars.name.as_str(), vars.age);

        console.line(&format!("Nombre: {}", profile.name()));
        console.line(&format!("Edad: {}", profile.age));
        console.line(&format!("Apellido: {}", profile.surname_or("sin asignar")));

        profile.age = profile.age.wrapping_add(1);
        console.line(&format!("Edad el próximo año: {}", profile.age));

        if let Some(surname) = &vars.surname {
            profile.surname = Some(surname.clone());
            console.line(&format!("Apellido asignado: {}", profile.surname_or("sin asignar")));
        }
    }

    fn functions(&self, console: &mut dyn Console) {
        let arith = &self.config.arithmetic;
        let subtract = subtraction();

        console.line(&format!("Resultado de la suma: {}", add(arith.augend, arith.addend)));
        console.line(&format!(
            "Resultado de la resta: {}",
            subtract(arith.augend, arith.addend)
        ));
        greet(console);
    }

    fn control(&self, console: &mut dyn Console) {
        let control = &self.config.control;

        console.line(&format!("El mayor es: {}", max_of(control.a, control.b)));
        compare(console, control.a, control.b);
        console.line(evaluate_number(control.number));
    }

    fn loops(&self, console: &mut dyn Console) {
        let loops = &self.config.loops;

        count_through(console, loops.range_start..=loops.range_end);
        let i = count_while(console, 0, loops.while_limit);
        count_do_while(console, i, loops.do_while_limit);
    }

    fn exceptions(&self, console: &mut dyn Console) -> usize {
        let arith = &self.config.arithmetic;
        let quotient = divide_recovering(console, arith.dividend, arith.divisor);
        console.line(&format!("Resultado de la división: {}", quotient.value));
        usize::from(quotient.recovered)
    }

    fn classes(&self, console: &mut dyn Console) {
        let person = &self.config.person;
        Person::new(person.name.as_str(), person.age).introduce(console);
    }

    fn inheritance(&self, console: &mut dyn Console) {
        let person = &self.config.person;
        let employee = &self.config.employee;

        put_to_work(console, &Person::new(person.name.as_str(), person.age));
        put_to_work(
            console,
            &Employee::new(employee.name.as_str(), employee.age, employee.job_title.as_str()),
        );
    }

    fn interfaces(&self, console: &mut dyn Console) {
        drive(console, &Car::new(self.config.vehicle.brand.as_str()));
    }
}
