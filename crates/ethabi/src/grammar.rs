/// Solidity type-string grammar. `EthAbi::parse(Rule::Abi, ..)` yields a
/// single `Rule::Type` pair covering the whole input.
#[derive(Parser)]
#[grammar = "abi.pest"]
pub struct EthAbi;
