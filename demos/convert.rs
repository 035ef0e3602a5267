use polychrome::Rgb;

pub fn main() {
    let rgb = Rgb::new(140.0, 200.0, 100.0);

    // 95.999999999999986, 47.619047619047606, 58.82352941176471
    let hsl = rgb.to_hsl();
    dbg!(hsl);

    // 33.769743798152412, 47.804102131355329, 19.503854144362037
    let xyz = rgb.to_xyz();

    // 74.701202400653059, -36.820412527327647, 43.639976636361411
    let lab = xyz.to_lab();

    // 74.701202400653059, 57.098076495664515, 130.15537245412389
    let lch = lab.to_lch();
    dbg!(lch);

    // "8CC864"
    dbg!(rgb.to_hex());
}
