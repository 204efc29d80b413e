//! Name-based entry point over [`Builtins`], for callers that hold the
//! primitive name and its arguments as values (the VM's builtin call path).

use crate::builtins::Builtins;
use tern_core::{latin1, PalError, Value};

/// Every name accepted by [`call_builtin`].
pub const BUILTIN_NAMES: [&str; 11] = [
    "join", "merge", "number", "istype", "fpack", "funpack", "system", "load", "read", "save",
    "argv",
];

/// Invoke the primitive called `name`. `merge` returns the mutated target.
pub fn call_builtin(
    builtins: &dyn Builtins,
    name: &str,
    args: Vec<Value>,
) -> Result<Value, PalError> {
    match name {
        "join" => {
            let [parts] = take::<1>(name, args)?;
            let parts = parts
                .as_list()
                .ok_or_else(|| expected(name, "a list", &parts))?;
            Ok(Value::from(builtins.join(parts)?))
        }
        "merge" => {
            let [mut target, source] = take::<2>(name, args)?;
            builtins.merge(&mut target, &source)?;
            Ok(target)
        }
        "number" => {
            let [value] = take::<1>(name, args)?;
            Ok(Value::from(builtins.number(&value)?))
        }
        "istype" => {
            let [value, tag] = take::<2>(name, args)?;
            let tag = tag.as_str().ok_or_else(|| expected(name, "a tag name", &tag))?;
            Ok(Value::from(builtins.istype(&value, tag)?))
        }
        "fpack" => {
            let [value] = take::<1>(name, args)?;
            let n = value
                .as_float()
                .ok_or_else(|| expected(name, "a number", &value))?;
            Ok(Value::from(builtins.fpack(n)?.to_vec()))
        }
        "funpack" => {
            let [value] = take::<1>(name, args)?;
            let bytes = value
                .as_bytes()
                .ok_or_else(|| expected(name, "bytes", &value))?;
            Ok(Value::from(builtins.funpack(bytes)?))
        }
        "system" => {
            let [command] = take::<1>(name, args)?;
            let command = command
                .as_str()
                .ok_or_else(|| expected(name, "a command string", &command))?;
            Ok(Value::from(i64::from(builtins.system(command)?)))
        }
        "load" => {
            let [path] = take::<1>(name, args)?;
            Ok(Value::from(builtins.load(path_arg(name, &path)?)?))
        }
        "read" => {
            let [path] = take::<1>(name, args)?;
            Ok(Value::from(builtins.read(path_arg(name, &path)?)?))
        }
        "save" => {
            let [path, data] = take::<2>(name, args)?;
            let path = path_arg(name, &path)?;
            match &data {
                Value::Bytes(bytes) => builtins.save(path, bytes)?,
                Value::String(text) => builtins.save(path, &latin1::encode(text)?)?,
                other => return Err(expected(name, "bytes", other)),
            }
            Ok(Value::None)
        }
        "argv" => {
            let [] = take::<0>(name, args)?;
            Ok(Value::List(
                builtins.argv().into_iter().map(Value::from).collect(),
            ))
        }
        _ => Err(PalError::type_error(format!("unknown builtin '{}'", name))),
    }
}

fn take<const N: usize>(name: &str, args: Vec<Value>) -> Result<[Value; N], PalError> {
    args.try_into().map_err(|args: Vec<Value>| {
        PalError::type_error(format!(
            "{}() takes {} argument(s), got {}",
            name,
            N,
            args.len()
        ))
    })
}

fn path_arg<'a>(name: &str, path: &'a Value) -> Result<&'a str, PalError> {
    path.as_str().ok_or_else(|| expected(name, "a path string", path))
}

fn expected(name: &str, what: &str, got: &Value) -> PalError {
    PalError::type_error(format!("{}() expects {}, got {}", name, what, got.kind()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HostBuiltins;
    use std::collections::BTreeMap;

    fn call(name: &str, args: Vec<Value>) -> Result<Value, PalError> {
        call_builtin(&HostBuiltins::new(), name, args)
    }

    #[test]
    fn join_by_name() {
        let out = call(
            "join",
            vec![Value::List(vec![Value::str("ab"), Value::str("cd")])],
        )
        .unwrap();
        assert_eq!(out, Value::bytes(b"abcd".to_vec()));
    }

    #[test]
    fn merge_by_name_returns_target() {
        let mut target = BTreeMap::new();
        target.insert("keep".to_string(), Value::Int(1));
        let mut source = BTreeMap::new();
        source.insert("add".to_string(), Value::Int(2));

        let merged = call("merge", vec![Value::Map(target), Value::Map(source)]).unwrap();
        let merged = merged.as_map().unwrap();
        assert_eq!(merged["keep"], Value::Int(1));
        assert_eq!(merged["add"], Value::Int(2));
    }

    #[test]
    fn number_and_istype_by_name() {
        assert_eq!(
            call("number", vec![Value::str("0x1A")]).unwrap(),
            Value::Float(26.0)
        );
        assert_eq!(
            call("istype", vec![Value::List(vec![]), Value::str("list")]).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn fpack_then_funpack_by_name() {
        let packed = call("fpack", vec![Value::Int(-3)]).unwrap();
        assert_eq!(packed.as_bytes().map(<[u8]>::len), Some(8));
        assert_eq!(call("funpack", vec![packed]).unwrap(), Value::Float(-3.0));
    }

    #[test]
    fn save_encodes_text_like_join() {
        let dir = std::env::temp_dir().join(format!("tern_dispatch_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("text.bin");
        let path_value = Value::str(path.to_str().unwrap());

        call("save", vec![path_value.clone(), Value::str("caf\u{e9}")]).unwrap();
        let joined = call("join", vec![Value::List(vec![Value::str("caf\u{e9}")])]).unwrap();
        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(Value::bytes(written), joined);

        let err = call("save", vec![path_value, Value::str("\u{20ac}")]).unwrap_err();
        assert!(matches!(err, PalError::Type(_)));
        assert_eq!(std::fs::read(&path).unwrap(), vec![b'c', b'a', b'f', 0xE9]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn wrong_arity_is_type_error() {
        let err = call("number", vec![]).unwrap_err();
        assert_eq!(err.to_string(), "type error: number() takes 1 argument(s), got 0");
    }

    #[test]
    fn wrong_argument_kind_is_type_error() {
        assert!(matches!(
            call("funpack", vec![Value::str("12345678")]),
            Err(PalError::Type(_))
        ));
        assert!(matches!(
            call("load", vec![Value::Int(1)]),
            Err(PalError::Type(_))
        ));
    }

    #[test]
    fn unknown_builtin_is_rejected() {
        assert!(matches!(call("eval", vec![]), Err(PalError::Type(_))));
    }

    #[test]
    fn every_listed_name_dispatches() {
        for name in BUILTIN_NAMES {
            let err = call(name, vec![Value::None; 5]);
            if let Err(PalError::Type(msg)) = err {
                assert!(!msg.starts_with("unknown builtin"), "{} not dispatched", name);
            }
        }
    }
}
