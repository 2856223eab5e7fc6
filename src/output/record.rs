use std::fmt;

pub(crate) trait Record {
    fn statistic<T: fmt::Display>(&mut self, _name: &str, _value: T) {}
}

/// Prints statistics as comment lines tagged with the algorithm name.
pub(crate) struct PrintStatistics {
    algorithm: &'static str,
}

impl PrintStatistics {
    pub(crate) fn new(algorithm: &'static str) -> Self {
        Self { algorithm }
    }
}

impl Record for PrintStatistics {
    fn statistic<T: fmt::Display>(&mut self, name: &str, value: T) {
        println!("% {} {}: {}", self.algorithm, name, value);
    }
}

#[cfg(test)]
impl Record for Vec<(String, String)> {
    fn statistic<T: fmt::Display>(&mut self, name: &str, value: T) {
        self.push((name.to_string(), value.to_string()));
    }
}
