use xdis_test::test::{normalize, parse_flags, Parser, Test};

#[test]
fn flags() {
    let src = " +mode64\t+strict  -abc-foo -foo  +bar+foo";
    let mut flags = parse_flags(src);
    assert_eq!(flags.next(), Some(("mode64", true)));
    assert_eq!(flags.next(), Some(("strict", true)));
    assert_eq!(flags.next(), Some(("abc-foo", false)));
    assert_eq!(flags.next(), Some(("foo", false)));
    assert_eq!(flags.next(), Some(("bar+foo", true)));
    assert_eq!(flags.next(), None);
}

#[test]
fn whitespace() {
    assert_eq!(normalize("  add   eax,\t ebx "), "add eax, ebx");
}

#[test]
fn parse() -> Result<(), String> {
    let src = r#"# comment
        1000: 00 00     ud # comment
        1000: 00 01     insn1 a, b # +mode64
        1004: 00 02     insn2 [a:b]
              00 03     prefix insn3 a, b, c
              03020100  nop
        100b     <label_a>  :
              00        aa
        0000100c <label_b>:
              00        aax
    "#;

    let mut parser = Parser::new("input", src);
    let mut test = Test::default();

    assert!(parser.parse(&mut test)?);
    assert_eq!(test.line, 2);
    assert_eq!(test.address, 0x1000);
    assert_eq!(test.bytes, &[0x00, 0x00]);
    assert_eq!(test.asm, "ud");
    assert_eq!(test.comment, "comment");

    assert!(parser.parse(&mut test)?);
    assert_eq!(test.line, 3);
    assert_eq!(test.address, 0x1000);
    assert_eq!(test.bytes, &[0x00, 0x01]);
    assert_eq!(test.asm, "insn1 a, b");
    assert_eq!(test.comment, "+mode64");

    assert!(parser.parse(&mut test)?);
    assert_eq!(test.address, 0x1004);
    assert_eq!(test.bytes, &[0x00, 0x02]);
    assert_eq!(test.asm, "insn2 [a:b]");

    assert!(parser.parse(&mut test)?);
    assert_eq!(test.address, 0x1006);
    assert_eq!(test.bytes, &[0x00, 0x03]);
    assert_eq!(test.asm, "prefix insn3 a, b, c");

    assert!(parser.parse(&mut test)?);
    assert_eq!(test.address, 0x1008);
    assert_eq!(test.bytes, &[0x00, 0x01, 0x02, 0x03]);
    assert_eq!(test.asm, "nop");

    assert!(parser.parse(&mut test)?);
    assert_eq!(test.address, 0x100b);
    assert_eq!(test.bytes, &[0x00]);
    assert_eq!(test.asm, "aa");

    assert!(parser.parse(&mut test)?);
    assert_eq!(test.address, 0x100c);
    assert_eq!(test.asm, "aax");

    assert!(!parser.parse(&mut test)?);

    let symbols = parser.into_symbols();
    assert_eq!(
        symbols.as_slice(),
        &[
            (0x100b, "label_a".to_string()),
            (0x100c, "label_b".to_string()),
        ]
    );

    Ok(())
}

#[test]
fn parse_all() -> Result<(), String> {
    let src = "
        2000: 90  nop
        2002: c3  ret
    ";
    let (address, data) = Parser::parse_all(src)?;
    assert_eq!(address, 0x2000);
    assert_eq!(data, &[0x90, 0x00, 0xc3]);
    Ok(())
}

#[test]
fn missing_bytes() {
    let mut parser = Parser::new("input", "1000: nop\n");
    let mut test = Test::default();
    assert!(parser.parse(&mut test).is_err());
}
