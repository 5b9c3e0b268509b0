//! LUT information command

use crate::InfoArgs;
use anyhow::Result;
use lutgrade_lut::CubeLut;
use tracing::trace;

pub fn run(args: InfoArgs, verbose: u8) -> Result<()> {
    for path in &args.lut {
        trace!(path = %path.display(), "info::run");
        let lut = super::load_lut(path)?;
        println!("{}", path.display());
        print!("{}", describe(&lut, verbose > 0));
    }
    Ok(())
}

fn describe(lut: &CubeLut, detailed: bool) -> String {
    let mut out = String::new();
    let size = lut.size();
    out.push_str(&format!("  Size:    {}x{}x{} ({} samples)\n", size, size, size, lut.samples().len()));
    if let Some(title) = lut.title() {
        out.push_str(&format!("  Title:   {}\n", title));
    }

    let (min, max) = (lut.domain_min(), lut.domain_max());
    out.push_str(&format!(
        "  Domain:  [{}, {}, {}] - [{}, {}, {}]\n",
        min[0], min[1], min[2], max[0], max[1], max[2]
    ));

    let (lo, hi) = lut.output_range();
    out.push_str(&format!("  Output:  R [{:.6}, {:.6}]\n", lo.r, hi.r));
    out.push_str(&format!("           G [{:.6}, {:.6}]\n", lo.g, hi.g));
    out.push_str(&format!("           B [{:.6}, {:.6}]\n", lo.b, hi.b));

    if detailed {
        let n = size - 1;
        for (name, (x, y, z)) in [("black", (0, 0, 0)), ("white", (n, n, n))] {
            let c = lut.get(x, y, z);
            out.push_str(&format!("  {:<7}  ({:.6}, {:.6}, {:.6})\n", name, c.r, c.g, c.b));
        }
    }
    out
}
