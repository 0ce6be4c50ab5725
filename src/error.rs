use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: multiple headers")]
    MultipleHeaders { line: usize },

    #[error("line {line}: wrong header, expected 4 tokens (p cnf <variables> <clauses>), got {found}")]
    HeaderArity { line: usize, found: usize },

    #[error("line {line}: expected `cnf` identifier, got `{found}`")]
    NotCnf { line: usize, found: String },

    #[error("line {line}: invalid number of variables or clauses `{token}`")]
    InvalidHeaderNumber { line: usize, token: String },

    #[error("line {line}: {var_count} variables do not fit in a literal")]
    TooManyVariables { line: usize, var_count: usize },

    #[error("line {line}: clause before header")]
    ClauseBeforeHeader { line: usize },

    #[error("line {line}: invalid literal `{token}`")]
    InvalidLiteral { line: usize, token: String },

    #[error("line {line}: literal {lit} out of bounds, expected absolute value in [1, {var_count}]")]
    LiteralOutOfRange {
        line: usize,
        lit: i32,
        var_count: usize,
    },

    #[error("missing `p cnf` header")]
    MissingHeader,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReduceError {
    #[error("clause {index} has {len} literals, pass-through accepts at most 3")]
    ClauseTooLong { index: usize, len: usize },

    #[error("clause {index} has {len} literals, vertex cover needs exactly 3")]
    NotThreeCnf { index: usize, len: usize },
}
