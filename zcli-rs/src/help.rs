//! Static usage text for the `help` command.

/// The full help text, printed as one block.
pub const TEXT: &str = r#"----------------------------------------------------------------
                        ZCLI Help
----------------------------------------------------------------
  define <name> "<value>"
      Define a variable with a literal string value.
  define <name> ((input))
      Define a variable from the last captured input.
  define <name> <part> : <part> : ...
      Concatenate quoted strings, (variables), and ((input)).
  show "<text>"  |  show (<name>)
      Print a literal or a variable; ':' concatenates parts.
      An optional trailing ((color <name-or-hex>)) colors the line.
  show input ["<prompt>"]
      Prompt for one line of input and store it; prints nothing.
  show ((input))
      Print the last captured input.
  $ <comment>
      Lines starting with '$' are ignored.
  save <filename>
      Save the program buffer (buffering mode) or the session
      history (immediate mode); '.zcli' is appended when missing.
  open <filename.zcli>
      Buffering mode: append the file's lines to the buffer.
      Immediate mode: execute the file's lines at once.
  execute
      Run every buffered program line (buffering mode only).
  int / comp
      Switch to immediate / buffering mode.
  exit
      Leave ZCLI.

Named colors: red, orange, yellow, green, blue, indigo, violet,
purple, cyan, white, black.  Hex codes are recognized but fall
back to the default color.
----------------------------------------------------------------"#;

// ── Tests ─────────────────────────────────────────────────────────────────────
