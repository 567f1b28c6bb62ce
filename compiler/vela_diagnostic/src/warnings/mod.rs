//! Warning classification and canonical message texts.
//!
//! The message builders keep the wording of compiler warnings in one place
//! so every phase reports the same condition with the same text. What a
//! message says is stable API; how a phase detected the condition is not.

/// Classification tag for a recorded warning.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum WarningKind {
    Default,
    AccessViolation,
    CallingConstructorInConstructor,
    CallingConstructorOnInstance,
    CallingNonStaticMethodOnClass,
    FunctionAbnormalExit,
    FunctionAlreadyDefined,
    FunctionNotFound,
    UnboundIdentifier,
    InvalidArguments,
    CyclicStaticDependency,
    InvalidRangeExpression,
    InvalidThis,
    MismatchReturnType,
    MissingReturnStatement,
    Parsing,
    TypeUndefined,
    PropertyNotFound,
    FileNotFound,
    AlreadyImported,
}

/// `this` rebinding.
pub const ASSIGN_TO_THIS: &str = "'this' is readonly and cannot be assigned to.";

/// `this` outside a member method.
pub const INVALID_THIS: &str = "'this' can only be used in member methods.";

/// `this` inside a static method.
pub const USING_THIS_IN_STATIC_METHOD: &str = "'this' cannot be used in static method.";

/// `break` at function scope.
pub const INVALID_BREAK_FOR_FUNCTION: &str =
    "Statement break causes function to abnormally return null.";

/// `continue` at function scope.
pub const INVALID_CONTINUE_FOR_FUNCTION: &str =
    "Statement continue cause function to abnormally return null.";

/// Zero step size in a range expression.
pub const RANGE_STEP_SIZE_ZERO: &str = "The step size of range expression should not be 0.";

/// Non-numeric or otherwise unusable step size.
pub const RANGE_STEP_SIZE_INVALID: &str = "The step size of range expression is invalid.";

/// Fractional step count in `..#` form.
pub const RANGE_STEP_NUMBER_NOT_INTEGER: &str =
    "The step number of range expression should be integer.";

/// Non-positive step count in `..#` form.
pub const RANGE_STEP_NUMBER_NOT_POSITIVE: &str =
    "The step number of range expression should be greater than 0.";

/// Instance property accessed through the class.
pub fn calling_non_static_property(class: &str, property: &str) -> String {
    format!("'{class}.{property}' is not a static property.")
}

/// Instance method called through the class.
pub fn calling_non_static_method(class: &str, method: &str) -> String {
    format!("'{class}.{method}()' is not a static method.")
}

pub fn method_has_invalid_arguments(method: &str) -> String {
    format!("'{method}()' has some invalid arguments.")
}

pub fn cyclic_static_dependency(first: &str, second: &str) -> String {
    format!("Cyclic dependency detected at '{first}' and '{second}'.")
}

pub fn calling_constructor_on_instance(constructor: &str) -> String {
    format!("Cannot call constructor '{constructor}()' on instance.")
}

pub fn calling_constructor_in_constructor(constructor: &str) -> String {
    format!("Cannot call constructor '{constructor}()' in itself.")
}

pub fn property_inaccessible(property: &str) -> String {
    format!("Property '{property}' is inaccessible.")
}

pub fn method_inaccessible(method: &str) -> String {
    format!("Method '{method}()' is inaccessible.")
}

pub fn property_not_found(property: &str) -> String {
    format!("Property '{property}' not found")
}

pub fn method_not_found(method: &str) -> String {
    format!("Method '{method}()' not found")
}

pub fn unbound_identifier(variable: &str) -> String {
    format!("Variable '{variable}' hasn't been defined yet.")
}

pub fn missing_return_on_some_path(method: &str) -> String {
    format!("Method '{method}()' doesn't return at all code paths.")
}

pub fn type_undefined(type_name: &str) -> String {
    format!("Type '{type_name}' is not defined.")
}

pub fn method_already_defined(method: &str) -> String {
    format!("Method '{method}()' is already defined.")
}

pub fn return_type_undefined(type_name: &str, method: &str) -> String {
    format!("Return type '{type_name}' of method '{method}()' is not defined.")
}

pub fn exception_type_undefined(type_name: &str) -> String {
    format!("Exception type '{type_name}' is not defined.")
}

pub fn argument_type_undefined(type_name: &str, argument: &str) -> String {
    format!("Type '{type_name}' of argument '{argument}' is not defined.")
}

pub fn non_static_member_in_static_context(member: &str) -> String {
    format!(
        "'{member}' is not a static property, so cannot be assigned to static properties or used in static methods."
    )
}

pub fn file_not_found(path: &str) -> String {
    format!("File : '{path}' not found")
}

pub fn already_imported(path: &str) -> String {
    format!("File : '{path}' is already imported")
}
