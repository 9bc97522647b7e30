// src/noyau/operation.rs

/// Les quatre opérations binaires du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Addition,
    Soustraction,
    Multiplication,
    Division,
}

impl Operation {
    /// Symbole affiché sur la touche.
    pub fn symbole(self) -> char {
        match self {
            Operation::Addition => '+',
            Operation::Soustraction => '-',
            Operation::Multiplication => '×',
            Operation::Division => '÷',
        }
    }

    /// Symbole -> opération. Accepte aussi `*` et `/` (notation ASCII).
    pub fn depuis_symbole(c: char) -> Option<Operation> {
        match c {
            '+' => Some(Operation::Addition),
            '-' | '−' => Some(Operation::Soustraction),
            '×' | '*' => Some(Operation::Multiplication),
            '÷' | '/' => Some(Operation::Division),
            _ => None,
        }
    }
}

/// Évaluation pure, en f64 IEEE-754, sans garde sur b = 0.
pub fn evaluer(a: f64, b: f64, op: Operation) -> f64 {
    evaluer_symbole(a, b, op.symbole())
}

/// Évaluation par symbole de touche : un symbole inconnu renvoie `b` tel quel.
pub fn evaluer_symbole(a: f64, b: f64, symbole: char) -> f64 {
    match Operation::depuis_symbole(symbole) {
        Some(Operation::Addition) => a + b,
        Some(Operation::Soustraction) => a - b,
        Some(Operation::Multiplication) => a * b,
        Some(Operation::Division) => a / b,
        None => b,
    }
}
