//! Execution sandbox: runs or previews a snippet for a small closed set of
//! source kinds and reports a normalized result.
//!
//! Script snippets run through a small built-in interpreter: a fresh scope
//! per call (no binding survives into the next run), console channels
//! captured line by line, and the value of a trailing expression reported
//! as the run's return value. Markup is previewed through a detached
//! document; stylesheets get a structural rule count only. Nothing here
//! ever propagates an error to the caller.

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use tracing::instrument;

use crate::domain::{ExecutionResult, SourceKind};

/// Run or preview `code` under the editor's language tag. Always resolves
/// to a result; unsupported kinds and evaluation errors land in
/// `error_message`, never in a panic or an Err.
#[instrument(level = "info", skip(code), fields(code_len = code.len(), %language))]
pub fn run(code: &str, language: &str) -> ExecutionResult {
  // Empty submissions are rejected before any evaluation work.
  if code.trim().is_empty() {
    return ExecutionResult {
      output: String::new(),
      error_message: Some("Nothing to run: the editor is empty.".into()),
      elapsed_millis: 0.0,
    };
  }

  let start = Instant::now();
  let (output, error_message) = match SourceKind::from_tag(language) {
    Some(SourceKind::Script) => run_script(code),
    Some(SourceKind::Markup) => preview_markup(code),
    Some(SourceKind::Stylesheet) => check_stylesheet(code),
    None => (
      String::new(),
      Some(format!(
        "Language {} is not supported yet. Currently supporting: JavaScript, HTML, CSS",
        language
      )),
    ),
  };

  ExecutionResult {
    output,
    error_message,
    elapsed_millis: start.elapsed().as_secs_f64() * 1000.0,
  }
}

// -------- script kind --------

fn run_script(code: &str) -> (String, Option<String>) {
  let mut logs: Vec<String> = Vec::new();
  match eval_script(code, &mut logs) {
    Ok(ret) => {
      if let Some(v) = ret {
        logs.push(format!("Return value: {}", fmt_value(&v)));
      }
      let output = if logs.is_empty() {
        "Code executed successfully (no output)".to_string()
      } else {
        logs.join("\n")
      };
      (output, None)
    }
    Err(msg) => (String::new(), Some(msg)),
  }
}

/// Evaluate a whole script in a fresh scope. Returns the script's value:
/// an explicit `return`, or the value of the trailing expression
/// statement; `None` when the script ends on a non-value (undefined).
fn eval_script(code: &str, logs: &mut Vec<String>) -> Result<Option<Value>, String> {
  let tokens = lex(code)?;
  let program = Parser::new(tokens).parse_program()?;

  let mut interp = Interp { env: HashMap::new(), consts: HashSet::new(), logs };
  let mut last = Value::Undefined;
  for stmt in &program {
    match interp.eval_stmt(stmt)? {
      Control::Normal(v) => last = v,
      Control::Return(v) => return Ok(defined(v)),
    }
  }
  Ok(defined(last))
}

fn defined(v: Value) -> Option<Value> {
  match v {
    Value::Undefined => None,
    other => Some(other),
  }
}

#[derive(Clone, Debug, PartialEq)]
enum Value {
  Num(f64),
  Str(String),
  Bool(bool),
  Null,
  Undefined,
}

fn fmt_value(v: &Value) -> String {
  match v {
    Value::Num(n) => fmt_num(*n),
    Value::Str(s) => s.clone(),
    Value::Bool(b) => b.to_string(),
    Value::Null => "null".into(),
    Value::Undefined => "undefined".into(),
  }
}

fn fmt_num(n: f64) -> String {
  if n.is_nan() {
    "NaN".into()
  } else if n.is_infinite() {
    if n > 0.0 { "Infinity".into() } else { "-Infinity".into() }
  } else if n.fract() == 0.0 && n.abs() < 1e15 {
    format!("{}", n as i64)
  } else {
    format!("{}", n)
  }
}

// -------- lexer --------

#[derive(Clone, Debug, PartialEq)]
enum Tok {
  Num(f64),
  Str(String),
  Ident(String),
  Punct(&'static str),
}

const PUNCTS: &[&str] = &[
  "===", "!==", "==", "!=", "<=", ">=", "+", "-", "*", "/", "%", "(", ")", ".", ",", ";", "=",
  "<", ">", "!",
];

fn lex(src: &str) -> Result<Vec<Tok>, String> {
  let chars: Vec<char> = src.chars().collect();
  let mut toks = Vec::new();
  let mut i = 0;

  while i < chars.len() {
    let c = chars[i];
    if c.is_whitespace() {
      i += 1;
      continue;
    }
    // line and block comments
    if c == '/' && chars.get(i + 1) == Some(&'/') {
      while i < chars.len() && chars[i] != '\n' {
        i += 1;
      }
      continue;
    }
    if c == '/' && chars.get(i + 1) == Some(&'*') {
      i += 2;
      while i + 1 < chars.len() && !(chars[i] == '*' && chars[i + 1] == '/') {
        i += 1;
      }
      if i + 1 >= chars.len() {
        return Err("Unterminated comment".into());
      }
      i += 2;
      continue;
    }
    if c.is_ascii_digit() || (c == '.' && chars.get(i + 1).is_some_and(|d| d.is_ascii_digit())) {
      let start = i;
      while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
        i += 1;
      }
      let text: String = chars[start..i].iter().collect();
      let n = text.parse::<f64>().map_err(|_| format!("Invalid number literal: {}", text))?;
      toks.push(Tok::Num(n));
      continue;
    }
    if c == '"' || c == '\'' {
      let quote = c;
      i += 1;
      let mut s = String::new();
      loop {
        match chars.get(i) {
          None => return Err("Unterminated string literal".into()),
          Some(&ch) if ch == quote => {
            i += 1;
            break;
          }
          Some('\\') => {
            i += 1;
            match chars.get(i) {
              Some('n') => s.push('\n'),
              Some('t') => s.push('\t'),
              Some(&e) => s.push(e),
              None => return Err("Unterminated string literal".into()),
            }
            i += 1;
          }
          Some(&ch) => {
            s.push(ch);
            i += 1;
          }
        }
      }
      toks.push(Tok::Str(s));
      continue;
    }
    if c.is_ascii_alphabetic() || c == '_' || c == '$' {
      let start = i;
      while i < chars.len()
        && (chars[i].is_ascii_alphanumeric() || chars[i] == '_' || chars[i] == '$')
      {
        i += 1;
      }
      toks.push(Tok::Ident(chars[start..i].iter().collect()));
      continue;
    }
    let rest: String = chars[i..chars.len().min(i + 3)].iter().collect();
    match PUNCTS.iter().find(|p| rest.starts_with(**p)) {
      Some(&p) => {
        toks.push(Tok::Punct(p));
        i += p.len();
      }
      None => return Err(format!("Unexpected character: {}", c)),
    }
  }

  Ok(toks)
}

// -------- parser --------

#[derive(Clone, Debug)]
enum Expr {
  Num(f64),
  Str(String),
  Bool(bool),
  Null,
  Ident(String),
  Unary(&'static str, Box<Expr>),
  Binary(&'static str, Box<Expr>, Box<Expr>),
  Call { callee: Callee, args: Vec<Expr> },
}

#[derive(Clone, Debug)]
enum Callee {
  Func(String),
  Method { object: String, method: String },
}

#[derive(Clone, Debug)]
enum Stmt {
  Decl { name: String, constant: bool, init: Expr },
  Assign { name: String, value: Expr },
  Expr(Expr),
  Return(Option<Expr>),
}

struct Parser {
  toks: Vec<Tok>,
  pos: usize,
}

impl Parser {
  fn new(toks: Vec<Tok>) -> Self {
    Self { toks, pos: 0 }
  }

  fn peek(&self) -> Option<&Tok> {
    self.toks.get(self.pos)
  }

  fn peek2(&self) -> Option<&Tok> {
    self.toks.get(self.pos + 1)
  }

  fn next(&mut self) -> Option<Tok> {
    let t = self.toks.get(self.pos).cloned();
    if t.is_some() {
      self.pos += 1;
    }
    t
  }

  fn eat_punct(&mut self, p: &'static str) -> bool {
    if self.peek() == Some(&Tok::Punct(p)) {
      self.pos += 1;
      true
    } else {
      false
    }
  }

  fn expect_punct(&mut self, p: &'static str) -> Result<(), String> {
    if self.eat_punct(p) {
      Ok(())
    } else {
      Err(match self.peek() {
        Some(t) => format!("Expected '{}', found {}", p, describe(t)),
        None => format!("Expected '{}', found end of input", p),
      })
    }
  }

  fn parse_program(mut self) -> Result<Vec<Stmt>, String> {
    let mut stmts = Vec::new();
    while self.peek().is_some() {
      while self.eat_punct(";") {}
      if self.peek().is_none() {
        break;
      }
      stmts.push(self.parse_stmt()?);
      while self.eat_punct(";") {}
    }
    Ok(stmts)
  }

  fn parse_stmt(&mut self) -> Result<Stmt, String> {
    match self.peek() {
      Some(Tok::Ident(kw)) if kw == "let" || kw == "const" || kw == "var" => {
        let constant = kw == "const";
        self.next();
        let name = match self.next() {
          Some(Tok::Ident(n)) => n,
          other => return Err(unexpected(other.as_ref(), "a variable name")),
        };
        self.expect_punct("=")?;
        let init = self.parse_expr()?;
        Ok(Stmt::Decl { name, constant, init })
      }
      Some(Tok::Ident(kw)) if kw == "return" => {
        self.next();
        let value = match self.peek() {
          None | Some(Tok::Punct(";")) => None,
          _ => Some(self.parse_expr()?),
        };
        Ok(Stmt::Return(value))
      }
      Some(Tok::Ident(_)) if self.peek2() == Some(&Tok::Punct("=")) => {
        let name = match self.next() {
          Some(Tok::Ident(n)) => n,
          _ => unreachable!(),
        };
        self.next(); // '='
        let value = self.parse_expr()?;
        Ok(Stmt::Assign { name, value })
      }
      _ => Ok(Stmt::Expr(self.parse_expr()?)),
    }
  }

  fn parse_expr(&mut self) -> Result<Expr, String> {
    self.parse_equality()
  }

  fn parse_equality(&mut self) -> Result<Expr, String> {
    let mut lhs = self.parse_relational()?;
    loop {
      let op = match self.peek() {
        Some(Tok::Punct("==")) | Some(Tok::Punct("===")) => "==",
        Some(Tok::Punct("!=")) | Some(Tok::Punct("!==")) => "!=",
        _ => break,
      };
      self.next();
      let rhs = self.parse_relational()?;
      lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
  }

  fn parse_relational(&mut self) -> Result<Expr, String> {
    let mut lhs = self.parse_additive()?;
    loop {
      let op = match self.peek() {
        Some(Tok::Punct("<")) => "<",
        Some(Tok::Punct("<=")) => "<=",
        Some(Tok::Punct(">")) => ">",
        Some(Tok::Punct(">=")) => ">=",
        _ => break,
      };
      self.next();
      let rhs = self.parse_additive()?;
      lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
  }

  fn parse_additive(&mut self) -> Result<Expr, String> {
    let mut lhs = self.parse_term()?;
    loop {
      let op = match self.peek() {
        Some(Tok::Punct("+")) => "+",
        Some(Tok::Punct("-")) => "-",
        _ => break,
      };
      self.next();
      let rhs = self.parse_term()?;
      lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
  }

  fn parse_term(&mut self) -> Result<Expr, String> {
    let mut lhs = self.parse_unary()?;
    loop {
      let op = match self.peek() {
        Some(Tok::Punct("*")) => "*",
        Some(Tok::Punct("/")) => "/",
        Some(Tok::Punct("%")) => "%",
        _ => break,
      };
      self.next();
      let rhs = self.parse_unary()?;
      lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
  }

  fn parse_unary(&mut self) -> Result<Expr, String> {
    if self.eat_punct("-") {
      return Ok(Expr::Unary("-", Box::new(self.parse_unary()?)));
    }
    if self.eat_punct("!") {
      return Ok(Expr::Unary("!", Box::new(self.parse_unary()?)));
    }
    self.parse_postfix()
  }

  /// Calls are only valid on identifiers (`f(...)`) or a single member
  /// hop (`console.log(...)`); anything deeper is a parse error.
  fn parse_postfix(&mut self) -> Result<Expr, String> {
    if let Some(Tok::Ident(_)) = self.peek() {
      let name = match self.next() {
        Some(Tok::Ident(n)) => n,
        _ => unreachable!(),
      };
      if self.eat_punct(".") {
        let method = match self.next() {
          Some(Tok::Ident(m)) => m,
          other => return Err(unexpected(other.as_ref(), "a method name")),
        };
        self.expect_punct("(")?;
        let args = self.parse_args()?;
        return Ok(Expr::Call { callee: Callee::Method { object: name, method }, args });
      }
      if self.eat_punct("(") {
        let args = self.parse_args()?;
        return Ok(Expr::Call { callee: Callee::Func(name), args });
      }
      return Ok(match name.as_str() {
        "true" => Expr::Bool(true),
        "false" => Expr::Bool(false),
        "null" => Expr::Null,
        "undefined" => Expr::Ident(name), // resolves to Undefined below
        _ => Expr::Ident(name),
      });
    }
    self.parse_primary()
  }

  fn parse_args(&mut self) -> Result<Vec<Expr>, String> {
    let mut args = Vec::new();
    if self.eat_punct(")") {
      return Ok(args);
    }
    loop {
      args.push(self.parse_expr()?);
      if self.eat_punct(",") {
        continue;
      }
      self.expect_punct(")")?;
      break;
    }
    Ok(args)
  }

  fn parse_primary(&mut self) -> Result<Expr, String> {
    match self.next() {
      Some(Tok::Num(n)) => Ok(Expr::Num(n)),
      Some(Tok::Str(s)) => Ok(Expr::Str(s)),
      Some(Tok::Punct("(")) => {
        let inner = self.parse_expr()?;
        self.expect_punct(")")?;
        Ok(inner)
      }
      other => Err(unexpected(other.as_ref(), "an expression")),
    }
  }
}

fn describe(t: &Tok) -> String {
  match t {
    Tok::Num(n) => format!("number {}", fmt_num(*n)),
    Tok::Str(_) => "a string".into(),
    Tok::Ident(n) => format!("'{}'", n),
    Tok::Punct(p) => format!("'{}'", p),
  }
}

fn unexpected(t: Option<&Tok>, wanted: &str) -> String {
  match t {
    Some(t) => format!("Expected {}, found {}", wanted, describe(t)),
    None => format!("Expected {}, found end of input", wanted),
  }
}

// -------- evaluator --------

enum Control {
  Normal(Value),
  Return(Value),
}

struct Interp<'a> {
  env: HashMap<String, Value>,
  consts: HashSet<String>,
  logs: &'a mut Vec<String>,
}

impl Interp<'_> {
  fn eval_stmt(&mut self, stmt: &Stmt) -> Result<Control, String> {
    match stmt {
      Stmt::Decl { name, constant, init } => {
        let v = self.eval(init)?;
        if *constant {
          self.consts.insert(name.clone());
        }
        self.env.insert(name.clone(), v);
        Ok(Control::Normal(Value::Undefined))
      }
      Stmt::Assign { name, value } => {
        if !self.env.contains_key(name) {
          return Err(format!("{} is not defined", name));
        }
        if self.consts.contains(name) {
          return Err("Assignment to constant variable.".into());
        }
        let v = self.eval(value)?;
        self.env.insert(name.clone(), v);
        Ok(Control::Normal(Value::Undefined))
      }
      Stmt::Expr(e) => Ok(Control::Normal(self.eval(e)?)),
      Stmt::Return(e) => {
        let v = match e {
          Some(e) => self.eval(e)?,
          None => Value::Undefined,
        };
        Ok(Control::Return(v))
      }
    }
  }

  fn eval(&mut self, expr: &Expr) -> Result<Value, String> {
    match expr {
      Expr::Num(n) => Ok(Value::Num(*n)),
      Expr::Str(s) => Ok(Value::Str(s.clone())),
      Expr::Bool(b) => Ok(Value::Bool(*b)),
      Expr::Null => Ok(Value::Null),
      Expr::Ident(name) if name == "undefined" => Ok(Value::Undefined),
      Expr::Ident(name) => self
        .env
        .get(name)
        .cloned()
        .ok_or_else(|| format!("{} is not defined", name)),
      Expr::Unary(op, inner) => {
        let v = self.eval(inner)?;
        match *op {
          "-" => match v {
            Value::Num(n) => Ok(Value::Num(-n)),
            other => Err(format!("Cannot negate {}", type_name(&other))),
          },
          "!" => Ok(Value::Bool(!truthy(&v))),
          _ => unreachable!(),
        }
      }
      Expr::Binary(op, lhs, rhs) => {
        let a = self.eval(lhs)?;
        let b = self.eval(rhs)?;
        self.eval_binary(op, a, b)
      }
      Expr::Call { callee, args } => {
        let mut values = Vec::with_capacity(args.len());
        for a in args {
          values.push(self.eval(a)?);
        }
        self.eval_call(callee, values)
      }
    }
  }

  fn eval_binary(&mut self, op: &str, a: Value, b: Value) -> Result<Value, String> {
    match op {
      "+" => match (&a, &b) {
        (Value::Num(x), Value::Num(y)) => Ok(Value::Num(x + y)),
        (Value::Str(_), _) | (_, Value::Str(_)) => {
          Ok(Value::Str(format!("{}{}", fmt_value(&a), fmt_value(&b))))
        }
        _ => Err(format!("Cannot add {} and {}", type_name(&a), type_name(&b))),
      },
      "-" | "*" | "/" | "%" => match (&a, &b) {
        (Value::Num(x), Value::Num(y)) => {
          let n = match op {
            "-" => x - y,
            "*" => x * y,
            "/" => x / y,
            _ => x % y,
          };
          Ok(Value::Num(n))
        }
        _ => Err(format!(
          "Cannot apply '{}' to {} and {}",
          op,
          type_name(&a),
          type_name(&b)
        )),
      },
      "==" => Ok(Value::Bool(loose_eq(&a, &b))),
      "!=" => Ok(Value::Bool(!loose_eq(&a, &b))),
      "<" | "<=" | ">" | ">=" => match (&a, &b) {
        (Value::Num(x), Value::Num(y)) => Ok(Value::Bool(compare(op, x.partial_cmp(y)))),
        (Value::Str(x), Value::Str(y)) => Ok(Value::Bool(compare(op, Some(x.cmp(y))))),
        _ => Err(format!(
          "Cannot compare {} and {}",
          type_name(&a),
          type_name(&b)
        )),
      },
      _ => unreachable!(),
    }
  }

  fn eval_call(&mut self, callee: &Callee, args: Vec<Value>) -> Result<Value, String> {
    match callee {
      Callee::Method { object, method } if object == "console" => {
        let line = args.iter().map(fmt_value).collect::<Vec<_>>().join(" ");
        match method.as_str() {
          "log" => self.logs.push(line),
          "error" => self.logs.push(format!("ERROR: {}", line)),
          "warn" => self.logs.push(format!("WARNING: {}", line)),
          other => return Err(format!("console.{} is not a function", other)),
        }
        Ok(Value::Undefined)
      }
      Callee::Method { object, .. } => {
        if self.env.contains_key(object) {
          Err(format!("{}.{} is not a function", object, callee_method(callee)))
        } else {
          Err(format!("{} is not defined", object))
        }
      }
      Callee::Func(name) => {
        if self.env.contains_key(name) {
          Err(format!("{} is not a function", name))
        } else {
          Err(format!("{} is not defined", name))
        }
      }
    }
  }
}

fn callee_method(c: &Callee) -> &str {
  match c {
    Callee::Method { method, .. } => method,
    Callee::Func(_) => "",
  }
}

fn type_name(v: &Value) -> &'static str {
  match v {
    Value::Num(_) => "a number",
    Value::Str(_) => "a string",
    Value::Bool(_) => "a boolean",
    Value::Null => "null",
    Value::Undefined => "undefined",
  }
}

fn truthy(v: &Value) -> bool {
  match v {
    Value::Undefined | Value::Null => false,
    Value::Bool(b) => *b,
    Value::Num(n) => *n != 0.0 && !n.is_nan(),
    Value::Str(s) => !s.is_empty(),
  }
}

fn loose_eq(a: &Value, b: &Value) -> bool {
  let nullish = |v: &Value| matches!(v, Value::Null | Value::Undefined);
  if nullish(a) && nullish(b) {
    return true;
  }
  a == b
}

fn compare(op: &str, ord: Option<std::cmp::Ordering>) -> bool {
  use std::cmp::Ordering::*;
  match (op, ord) {
    ("<", Some(Less)) => true,
    ("<=", Some(Less)) | ("<=", Some(Equal)) => true,
    (">", Some(Greater)) => true,
    (">=", Some(Greater)) | (">=", Some(Equal)) => true,
    _ => false,
  }
}

// -------- markup kind --------

/// Detached preview document. Created per call and dropped on every path;
/// nothing about a preview outlives the run.
struct PreviewDocument {
  html: String,
}

impl PreviewDocument {
  fn new(html: &str) -> Self {
    Self { html: html.to_string() }
  }

  /// Inner markup of the body element, or the whole document when no body
  /// tag is present (fragments are common in lesson snippets).
  fn body_inner(&self) -> String {
    let lower = self.html.to_ascii_lowercase();
    let open = match lower.find("<body") {
      Some(at) => match lower[at..].find('>') {
        Some(gt) => at + gt + 1,
        None => return String::new(),
      },
      None => return self.html.trim().to_string(),
    };
    let close = lower[open..].find("</body>").map(|c| open + c).unwrap_or(self.html.len());
    self.html[open..close].trim().to_string()
  }
}

fn preview_markup(code: &str) -> (String, Option<String>) {
  let doc = PreviewDocument::new(code);
  let body = doc.body_inner();
  let content = if body.is_empty() { "Empty HTML".to_string() } else { body };
  (format!("HTML Preview:\n{}", content), None)
}

// -------- stylesheet kind --------

/// Structural validation only: count rule blocks that close with a brace
/// and contain an opening one. No property parsing, no execution.
fn check_stylesheet(code: &str) -> (String, Option<String>) {
  let rule_count = code
    .split('}')
    .map(str::trim)
    .filter(|rule| !rule.is_empty() && rule.contains('{'))
    .count();
  (
    format!("CSS parsed successfully!\nFound {} CSS rules", rule_count),
    None,
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn trailing_expression_becomes_the_return_value() {
    let r = run("1+1", "javascript");
    assert_eq!(r.output, "Return value: 2");
    assert_eq!(r.error_message, None);
    assert!(r.elapsed_millis >= 0.0);
  }

  #[test]
  fn console_channels_are_captured_and_tagged() {
    let code = "let x = 2 * 21;\nconsole.log(\"answer\", x);\nconsole.warn(\"careful\");\nconsole.error(\"boom\");";
    let r = run(code, "js");
    assert_eq!(
      r.output,
      "answer 42\nWARNING: careful\nERROR: boom"
    );
    assert_eq!(r.error_message, None);
  }

  #[test]
  fn log_as_last_statement_adds_no_return_line() {
    let r = run("console.log(1)", "javascript");
    assert_eq!(r.output, "1");
  }

  #[test]
  fn explicit_return_wins_over_later_statements() {
    let r = run("return \"done\"; 1+1", "javascript");
    assert_eq!(r.output, "Return value: done");
  }

  #[test]
  fn no_output_no_return_reports_success_line() {
    let r = run("let quiet = 1", "javascript");
    assert_eq!(r.output, "Code executed successfully (no output)");
    assert_eq!(r.error_message, None);
  }

  #[test]
  fn thrown_errors_are_reported_not_propagated() {
    let r = run("missing + 1", "javascript");
    assert_eq!(r.output, "");
    assert_eq!(r.error_message.as_deref(), Some("missing is not defined"));
  }

  #[test]
  fn scope_is_fresh_between_runs() {
    let first = run("let kept = 41; kept + 1", "javascript");
    assert_eq!(first.output, "Return value: 42");
    // The binding from the previous run must not leak into this one.
    let second = run("kept", "javascript");
    assert_eq!(second.error_message.as_deref(), Some("kept is not defined"));

    // Same independence after a failed run.
    let failed = run("let ghost = 1; ghost + boom", "javascript");
    assert!(failed.error_message.is_some());
    let after = run("ghost", "javascript");
    assert_eq!(after.error_message.as_deref(), Some("ghost is not defined"));
  }

  #[test]
  fn const_reassignment_is_an_error() {
    let r = run("const pi = 3.14; pi = 3;", "javascript");
    assert_eq!(r.error_message.as_deref(), Some("Assignment to constant variable."));
  }

  #[test]
  fn string_concat_and_comparison_work() {
    assert_eq!(run("\"foo\" + \"bar\"", "js").output, "Return value: foobar");
    assert_eq!(run("\"count: \" + 3", "js").output, "Return value: count: 3");
    assert_eq!(run("2 <= 3", "js").output, "Return value: true");
    assert_eq!(run("1 === 2", "js").output, "Return value: false");
  }

  #[test]
  fn division_by_zero_follows_float_semantics() {
    assert_eq!(run("1 / 0", "javascript").output, "Return value: Infinity");
  }

  #[test]
  fn markup_preview_extracts_body_content() {
    let r = run("<html><body><h1>Hi</h1></body></html>", "html");
    assert_eq!(r.output, "HTML Preview:\n<h1>Hi</h1>");
    assert_eq!(r.error_message, None);
  }

  #[test]
  fn markup_without_body_tag_previews_the_fragment() {
    let r = run("<p>fragment</p>", "html");
    assert_eq!(r.output, "HTML Preview:\n<p>fragment</p>");
  }

  #[test]
  fn empty_body_previews_as_empty_html() {
    let r = run("<html><body>  </body></html>", "html");
    assert_eq!(r.output, "HTML Preview:\nEmpty HTML");
  }

  #[test]
  fn stylesheet_rules_are_counted_not_executed() {
    let css = "body { margin: 0; }\nh1 { color: red; }\n";
    let r = run(css, "css");
    assert_eq!(r.output, "CSS parsed successfully!\nFound 2 CSS rules");
    assert_eq!(r.error_message, None);
  }

  #[test]
  fn unsupported_kind_names_the_language() {
    let r = run("print('hello')", "python");
    assert_eq!(r.output, "");
    assert_eq!(
      r.error_message.as_deref(),
      Some("Language python is not supported yet. Currently supporting: JavaScript, HTML, CSS")
    );
  }

  #[test]
  fn empty_submission_is_rejected_before_evaluation() {
    let r = run("   \n ", "javascript");
    assert_eq!(r.elapsed_millis, 0.0);
    assert_eq!(r.error_message.as_deref(), Some("Nothing to run: the editor is empty."));
  }

  #[test]
  fn parse_errors_surface_as_messages() {
    let r = run("let = 4", "javascript");
    assert!(r.error_message.is_some());
    let r = run("(1 + ", "javascript");
    assert!(r.error_message.is_some());
  }
}
