/// Shared function registry for differential evolution benchmarks
use debench_testfunctions::*;
use ndarray::Array1;

/// Test function type definition
pub type TestFunction = fn(&Array1<f64>) -> f64;

/// Ordered registry mapping names to function pointers.
///
/// Registration order is the benchmark order: the ten standard functions
/// come first so that `f1`..`f10` keep their historical meaning.
#[derive(Clone)]
pub struct FunctionRegistry {
    functions: Vec<(String, TestFunction)>,
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionRegistry {
    /// Creates a new registry with the standard benchmark functions.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register("sphere", sphere);
        registry.register("schwefel_2_22", schwefel_2_22);
        registry.register("schwefel_1_2", schwefel_1_2);
        registry.register("schwefel_2_21", schwefel_2_21);
        registry.register("rosenbrock", rosenbrock);
        registry.register("step", step);
        registry.register("quartic_noise", quartic_noise);
        registry.register("schwefel_2_26", schwefel_2_26);
        registry.register("rastrigin", rastrigin);
        registry.register("ackley", ackley);

        registry.register("quartic", quartic);
        registry
    }

    /// Creates a registry without any function.
    pub fn empty() -> Self {
        Self { functions: Vec::new() }
    }

    /// Adds `function` under `name`, replacing a previous entry in place.
    pub fn register(&mut self, name: &str, function: TestFunction) {
        match self.functions.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = function,
            None => self.functions.push((name.to_string(), function)),
        }
    }

    /// Gets a function by name, or by 1-based position written `f7` or `7`.
    pub fn get(&self, name: &str) -> Option<TestFunction> {
        if let Some((_, f)) = self.functions.iter().find(|(n, _)| n == name) {
            return Some(*f);
        }
        let number = name.strip_prefix('f').unwrap_or(name);
        number
            .parse::<usize>()
            .ok()
            .filter(|&k| k >= 1)
            .and_then(|k| self.functions.get(k - 1))
            .map(|(_, f)| *f)
    }

    /// Canonical name for `name`, resolving numeric aliases.
    pub fn resolve_name(&self, name: &str) -> Option<&str> {
        if let Some((n, _)) = self.functions.iter().find(|(n, _)| n == name) {
            return Some(n.as_str());
        }
        let number = name.strip_prefix('f').unwrap_or(name);
        number
            .parse::<usize>()
            .ok()
            .filter(|&k| k >= 1)
            .and_then(|k| self.functions.get(k - 1))
            .map(|(n, _)| n.as_str())
    }

    /// Lists all function names in registration order.
    pub fn list_functions(&self) -> Vec<String> {
        self.functions.iter().map(|(n, _)| n.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_order_and_aliases() {
        let registry = FunctionRegistry::new();
        let names = registry.list_functions();
        assert_eq!(names[0], "sphere");
        assert_eq!(names[9], "ackley");
        assert_eq!(registry.resolve_name("f5"), Some("rosenbrock"));
        assert_eq!(registry.resolve_name("9"), Some("rastrigin"));
        assert_eq!(registry.resolve_name("f0"), None);
        assert_eq!(registry.resolve_name("nope"), None);

        let x = Array1::from(vec![1.0, 1.0]);
        let f = registry.get("f1").unwrap();
        assert_eq!(f(&x), 2.0);
    }

    #[test]
    fn test_register_adds_and_replaces() {
        fn constant(_: &Array1<f64>) -> f64 {
            42.0
        }
        let mut registry = FunctionRegistry::new();
        let before = registry.len();
        registry.register("constant", constant);
        assert_eq!(registry.len(), before + 1);
        registry.register("sphere", constant);
        assert_eq!(registry.len(), before + 1);
        let x = Array1::from(vec![3.0]);
        assert_eq!(registry.get("sphere").unwrap()(&x), 42.0);
        assert_eq!(registry.list_functions()[0], "sphere");
    }
}
