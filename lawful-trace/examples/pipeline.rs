use lawful::{Monad, PartiallyApplied};
use lawful_trace::Traced;

type T = Traced<PartiallyApplied>;

// an unparseable input contributes nothing to the sum, and says so in the trace
fn parse(raw: &str) -> Traced<i64> {
    match raw.trim().parse::<i64>() {
        Ok(n) => Traced::step(format!("parse {:?}", raw), n),
        Err(e) => Traced::note(format!("skip {:?}", raw), e.to_string()).fuse(Traced::new(0)),
    }
}

fn main() -> std::io::Result<()> {
    let inputs = vec!["3", " 4", "five", "5 "];

    let parsed = T::all(inputs.into_iter().map(parse));
    let summed = T::flat_map(parsed, |xs| Traced::step("sum", xs.iter().sum::<i64>()))
        .label("pipeline", "parse then sum");

    println!("{}", summed.serialize_json()?);

    Ok(())
}
