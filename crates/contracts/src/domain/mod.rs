pub mod a025_rulebook;
