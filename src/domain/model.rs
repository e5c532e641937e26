use crate::domain::ports::{Console, Vehicle, Worker};

/// Values shown by the variables lesson: one fixed binding, one mutable, one optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    name: String,
    pub age: i32,
    pub surname: Option<String>,
}

impl Profile {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
            surname: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.surname.as_deref().unwrap_or(fallback)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    pub age: i32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn introduce(&self, console: &mut dyn Console) {
        console.line(&format!("Hola, soy {} y tengo {} años.", self.name, self.age));
    }
}

impl Worker for Person {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    person: Person,
    job_title: String,
}

impl Employee {
    pub fn new(name: impl Into<String>, age: i32, job_title: impl Into<String>) -> Self {
        Self {
            person: Person::new(name, age),
            job_title: job_title.into(),
        }
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    pub fn person(&self) -> &Person {
        &self.person
    }
}

impl Worker for Employee {
    fn name(&self) -> &str {
        self.person.name()
    }

    fn work(&self, console: &mut dyn Console) {
        console.line(&format!(
            "{} está trabajando como {}",
            self.name(),
            self.job_title
        ));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    brand: String,
}

impl Car {
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }
}

impl Vehicle for Car {
    fn start(&self, console: &mut dyn Console) {
        console.line(&format!("{} está arrancando", self.brand));
    }

    fn stop(&self, console: &mut dyn Console) {
        console.line(&format!("{} está detenido", self.brand));
    }
}
