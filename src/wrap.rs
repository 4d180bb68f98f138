//! Closures, function values, and wrapper composition.

use std::fmt::Debug;

/// Wraps a unary function so each call prints its argument and result.
///
/// The wrapped function's return value passes through unchanged.
pub fn traced<A, R, F>(name: &'static str, f: F) -> impl Fn(A) -> R
where
    A: Debug,
    R: Debug,
    F: Fn(A) -> R,
{
    move |arg: A| {
        println!("TRACE: calling {} with argument: {:?}", name, arg);
        let result = f(arg);
        println!("TRACE: {} returned {:?}", name, result);
        result
    }
}

/// Wrapper that uppercases a producer's output.
pub fn uppercased<F>(f: F) -> impl Fn() -> String
where
    F: Fn() -> String,
{
    move || f().to_uppercase()
}

/// Wrapper that splits a producer's output into its characters.
pub fn exploded<F>(f: F) -> impl Fn() -> Vec<char>
where
    F: Fn() -> String,
{
    move || f().chars().collect()
}

/// Closure factory: the returned closure captures `n` by value.
pub fn make_adder(n: i64) -> impl Fn(i64) -> i64 {
    move |x| x + n
}

/// A callable object: state plus a `call` method, where a bare closure
/// would not be nameable or inspectable.
#[derive(Debug, Clone, Copy)]
pub struct Adder {
    pub n: i64,
}

impl Adder {
    pub fn new(n: i64) -> Self {
        Adder { n }
    }

    pub fn call(&self, x: i64) -> i64 {
        self.n + x
    }
}

/// Picks a behavior at runtime and hands it back as a function value.
/// Volume above 0.5 yells, anything else whispers.
pub fn speaker(volume: f64) -> Box<dyn Fn(&str) -> String> {
    if volume > 0.5 {
        Box::new(|text: &str| format!("{}!", text.to_uppercase()))
    } else {
        Box::new(|text: &str| format!("{}...", text.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traced_passes_the_result_through() {
        let say = traced("say", |name: &str| format!("{}: hello", name));
        assert_eq!(say("wife"), "wife: hello");
    }

    #[test]
    fn wrappers_compose_outermost_last() {
        let greet = || "Hello".to_string();
        let shouted = uppercased(greet);
        assert_eq!(shouted(), "HELLO");

        let spelled = exploded(uppercased(|| "Hello".to_string()));
        assert_eq!(spelled(), vec!['H', 'E', 'L', 'L', 'O']);
    }

    #[test]
    fn closures_capture_their_environment() {
        let plus_3 = make_adder(3);
        let plus_5 = make_adder(5);
        assert_eq!(plus_3(4), 7);
        assert_eq!(plus_5(4), 9);
        // Each closure holds its own captured n.
        assert_eq!(plus_3(0), 3);
    }

    #[test]
    fn callable_object_behaves_like_a_closure() {
        let plus_3 = Adder::new(3);
        assert_eq!(plus_3.call(4), 7);
        assert_eq!(plus_3.call(plus_3.call(0)), 6);
    }

    #[test]
    fn speaker_chooses_behavior_by_volume() {
        assert_eq!(speaker(0.7)("hi"), "HI!");
        assert_eq!(speaker(0.2)("Hey, THEre"), "hey, there...");
        assert_eq!(speaker(0.5)("Edge"), "edge...");
    }

    #[test]
    fn functions_are_first_class_values() {
        fn yell(text: &str) -> String {
            format!("{}!", text.to_uppercase())
        }

        // Rebind and pass to a higher-order function.
        let bark = yell;
        let words: Vec<String> = ["you", "are", "barking"].iter().map(|w| bark(w)).collect();
        assert_eq!(words.join(" "), "YOU! ARE! BARKING!");
    }
}
