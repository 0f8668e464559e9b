//! The `demo` command - a short tour of the sequence operations.

use std::io::{self, Write};

use pullseq::{Cursor, OrdSequence, Sequence, fold, group_by, ord, reduce, zip};

use crate::common::CliResult;

/// Run the demo command.
pub fn run() -> CliResult<()> {
    render(&mut io::stdout().lock())?;
    Ok(())
}

/// Write the tour to `out`.
pub fn render(out: &mut impl Write) -> io::Result<()> {
    let input = || Cursor::new(vec![1, 2, 3]);

    writeln!(out, "filter >1    {:?}", input().filter(|v| *v > 1).to_vec())?;
    writeln!(out, "map *2       {:?}", input().map(|v| v * 2).to_vec())?;
    writeln!(out, "fold +       {}", fold(input(), |acc, v| acc + v, 0))?;
    writeln!(
        out,
        "reduce + []  {:?}",
        reduce(Cursor::<i32>::default(), |a, b| a + b)
    )?;
    writeln!(out, "cycle x7     {:?}", input().cycle().next_n(7))?;
    writeln!(
        out,
        "zip          {:?}",
        zip(input(), Cursor::new(vec!["a", "b"])).to_vec()
    )?;

    let mut groups: Vec<_> = group_by(input(), |v| v % 2 == 0).into_iter().collect();
    groups.sort_by_key(|(even, _)| *even);
    for (even, values) in groups {
        let label = if even { "even" } else { "odd" };
        writeln!(out, "group {label:<6} {values:?}")?;
    }

    let mixed = || Cursor::new(vec![5, -2, 9]);
    writeln!(out, "sort desc    {:?}", mixed().sort_by(ord::gt).to_vec())?;
    writeln!(
        out,
        "min max      {:?} {:?}",
        mixed().min_value(),
        mixed().max_value()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_deterministic() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        render(&mut first).unwrap();
        render(&mut second).unwrap();
        assert_eq!(first, second);
        assert!(String::from_utf8(first).unwrap().contains("fold +       6"));
    }
}
